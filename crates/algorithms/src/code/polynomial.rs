//! Polynomials with coefficients in GF(2^m)

use rand::RngCore;
use zeroize::Zeroize;

use crate::error::{validate, Error, Result};
use crate::gf2m::{Gf2m, GfElement};

/// A polynomial over GF(2^m), coefficients stored constant term first
///
/// The coefficient vector never has trailing zeros, so the zero polynomial
/// is the empty vector and `degree` is exact. The field is passed to every
/// operation that multiplies coefficients.
#[derive(Clone, Debug, Default, PartialEq, Eq, Zeroize)]
pub struct GfPoly {
    coeffs: Vec<GfElement>,
}

impl GfPoly {
    /// The zero polynomial
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// The constant `1`
    pub fn one() -> Self {
        Self { coeffs: vec![1] }
    }

    /// The monomial `c * x^degree`
    pub fn monomial(c: GfElement, degree: usize) -> Self {
        let mut coeffs = vec![0; degree + 1];
        coeffs[degree] = c;
        Self::from_coeffs(coeffs)
    }

    /// The polynomial `x`
    pub fn x() -> Self {
        Self::monomial(1, 1)
    }

    /// Build from coefficients, constant term first; trailing zeros are dropped
    pub fn from_coeffs(coeffs: Vec<GfElement>) -> Self {
        let mut p = Self { coeffs };
        p.normalize();
        p
    }

    fn normalize(&mut self) {
        while self.coeffs.last() == Some(&0) {
            self.coeffs.pop();
        }
    }

    /// Coefficients, constant term first
    pub fn coeffs(&self) -> &[GfElement] {
        &self.coeffs
    }

    /// Coefficient of `x^i`, zero past the degree
    #[inline]
    pub fn coeff(&self, i: usize) -> GfElement {
        self.coeffs.get(i).copied().unwrap_or(0)
    }

    /// Degree, or `None` for the zero polynomial
    #[inline]
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// True for the zero polynomial
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Leading coefficient, zero for the zero polynomial
    pub fn leading(&self) -> GfElement {
        self.coeffs.last().copied().unwrap_or(0)
    }

    /// True if the leading coefficient is one
    pub fn is_monic(&self) -> bool {
        self.leading() == 1
    }

    /// Sum (equivalently, difference)
    pub fn add(&self, other: &Self) -> Self {
        let (long, short) = if self.coeffs.len() >= other.coeffs.len() {
            (self, other)
        } else {
            (other, self)
        };
        let mut coeffs = long.coeffs.clone();
        for (c, s) in coeffs.iter_mut().zip(&short.coeffs) {
            *c ^= s;
        }
        Self::from_coeffs(coeffs)
    }

    /// Multiply every coefficient by `c`
    pub fn scale(&self, field: &Gf2m, c: GfElement) -> Self {
        Self::from_coeffs(self.coeffs.iter().map(|&a| field.mul(a, c)).collect())
    }

    /// Product
    pub fn mul(&self, field: &Gf2m, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let mut coeffs = vec![0; self.coeffs.len() + other.coeffs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in other.coeffs.iter().enumerate() {
                coeffs[i + j] ^= field.mul(a, b);
            }
        }
        Self::from_coeffs(coeffs)
    }

    /// Square; in characteristic 2 only even powers survive
    pub fn square(&self, field: &Gf2m) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        let mut coeffs = vec![0; 2 * self.coeffs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            coeffs[2 * i] = field.square(a);
        }
        Self::from_coeffs(coeffs)
    }

    /// Quotient and remainder of division by `divisor`
    pub fn divrem(&self, field: &Gf2m, divisor: &Self) -> Result<(Self, Self)> {
        let d = divisor
            .degree()
            .ok_or_else(|| Error::domain("polynomial division by zero"))?;
        let lead_inv = field.inv(divisor.leading())?;

        let mut rem = self.coeffs.clone();
        if rem.len() <= d {
            return Ok((Self::zero(), self.clone()));
        }
        let mut quot = vec![0; rem.len() - d];
        for i in (d..rem.len()).rev() {
            let c = field.mul(rem[i], lead_inv);
            if c == 0 {
                continue;
            }
            quot[i - d] = c;
            for (j, &dc) in divisor.coeffs.iter().enumerate() {
                rem[i - d + j] ^= field.mul(c, dc);
            }
        }
        rem.truncate(d);
        Ok((Self::from_coeffs(quot), Self::from_coeffs(rem)))
    }

    /// Remainder modulo `modulus`
    pub fn rem(&self, field: &Gf2m, modulus: &Self) -> Result<Self> {
        Ok(self.divrem(field, modulus)?.1)
    }

    /// Product reduced modulo `modulus`
    pub fn mul_mod(&self, field: &Gf2m, other: &Self, modulus: &Self) -> Result<Self> {
        self.mul(field, other).rem(field, modulus)
    }

    /// Scale to leading coefficient one; the zero polynomial stays zero
    pub fn make_monic(&self, field: &Gf2m) -> Result<Self> {
        if self.is_zero() {
            return Ok(Self::zero());
        }
        Ok(self.scale(field, field.inv(self.leading())?))
    }

    /// Monic greatest common divisor
    pub fn gcd(&self, field: &Gf2m, other: &Self) -> Result<Self> {
        let mut a = self.clone();
        let mut b = other.clone();
        while !b.is_zero() {
            let r = a.rem(field, &b)?;
            a = b;
            b = r;
        }
        a.make_monic(field)
    }

    /// Evaluate at `x` by Horner's rule
    pub fn eval(&self, field: &Gf2m, x: GfElement) -> GfElement {
        self.coeffs
            .iter()
            .rev()
            .fold(0, |acc, &c| field.add(field.mul(acc, x), c))
    }

    /// Inverse modulo `modulus` by the extended Euclidean algorithm
    ///
    /// Fails with `Domain` when `self` and `modulus` share a factor.
    pub fn inv_mod(&self, field: &Gf2m, modulus: &Self) -> Result<Self> {
        let mut r_prev = modulus.clone();
        let mut r_cur = self.rem(field, modulus)?;
        let mut s_prev = Self::zero();
        let mut s_cur = Self::one();

        while !r_cur.is_zero() {
            let (q, r) = r_prev.divrem(field, &r_cur)?;
            let s_next = s_prev.add(&q.mul(field, &s_cur));
            r_prev = r_cur;
            r_cur = r;
            s_prev = s_cur;
            s_cur = s_next;
        }

        // r_prev = gcd = s_prev * self (mod modulus)
        if r_prev.degree() != Some(0) {
            return Err(Error::domain("polynomial is not invertible modulo g"));
        }
        let c = field.inv(r_prev.leading())?;
        s_prev.scale(field, c).rem(field, modulus)
    }

    /// Square root modulo `modulus`, given `sqrt_x = sqrt(x) mod modulus`
    ///
    /// Splits `p = p_even(x^2) + x * p_odd(x^2)`; with field square roots of
    /// the coefficients this gives `sqrt(p) = sqrt(p_even) + sqrt_x * sqrt(p_odd)`.
    pub fn sqrt_mod(&self, field: &Gf2m, sqrt_x: &Self, modulus: &Self) -> Result<Self> {
        let p = self.rem(field, modulus)?;
        let even: Vec<GfElement> = p.coeffs.iter().step_by(2).map(|&c| field.sqrt(c)).collect();
        let odd: Vec<GfElement> = p
            .coeffs
            .iter()
            .skip(1)
            .step_by(2)
            .map(|&c| field.sqrt(c))
            .collect();
        let odd_part = Self::from_coeffs(odd).mul_mod(field, sqrt_x, modulus)?;
        Ok(Self::from_coeffs(even).add(&odd_part))
    }

    /// Random monic polynomial of the given degree
    pub fn random_monic<R: RngCore + ?Sized>(field: &Gf2m, degree: usize, rng: &mut R) -> Self {
        let mut coeffs: Vec<GfElement> = (0..degree).map(|_| field.random_element(rng)).collect();
        coeffs.push(1);
        Self { coeffs }
    }

    /// Ben-Or irreducibility test
    ///
    /// A polynomial `f` of degree `d` is irreducible iff
    /// `gcd(f, x^(q^i) - x) = 1` for every `1 <= i <= d/2`, where `q = 2^m`.
    pub fn is_irreducible(&self, field: &Gf2m) -> Result<bool> {
        let d = match self.degree() {
            None | Some(0) => return Ok(false),
            Some(d) => d,
        };
        let x = Self::x();
        let mut h = x.clone();
        for _ in 0..d / 2 {
            // h <- h^q mod f
            for _ in 0..field.m() {
                h = h.square(field).rem(field, self)?;
            }
            if h.add(&x).gcd(field, self)?.degree() != Some(0) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Draw random monic polynomials until an irreducible one of `degree` turns up
    ///
    /// Gives up with `RetryLimit` after `max_attempts` draws.
    pub fn random_irreducible<R: RngCore + ?Sized>(
        field: &Gf2m,
        degree: usize,
        max_attempts: usize,
        rng: &mut R,
    ) -> Result<Self> {
        validate::parameter(degree > 0, "degree", "irreducible degree must be positive")?;
        for attempt in 1..=max_attempts {
            let mut candidate = Self::random_monic(field, degree, rng);
            if candidate.is_irreducible(field)? {
                log::trace!("irreducible polynomial found after {} draws", attempt);
                return Ok(candidate);
            }
            candidate.zeroize();
        }
        log::warn!(
            "no irreducible polynomial of degree {} in {} draws",
            degree,
            max_attempts
        );
        Err(Error::RetryLimit {
            operation: "irreducible polynomial search",
            attempts: max_attempts,
        })
    }
}
