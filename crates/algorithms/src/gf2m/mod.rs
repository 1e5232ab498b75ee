//! Arithmetic in the binary extension field GF(2^m)
//!
//! Elements are integers in `[0, 2^m)` whose bit `i` is the coefficient of
//! `x^i` in the polynomial basis defined by the fixed field polynomial for
//! `m`. Multiplication, inversion, division, squaring and square roots go
//! through exponent/logarithm tables built once per field; the tables are
//! read-only afterwards and can be shared between threads.

use core::fmt;

use mecs_internal::constant_time::ct_is_zero_u16;
use mecs_params::pqc::mceliece::{field_polynomial, MAX_FIELD_EXPONENT, MIN_FIELD_EXPONENT};
use rand::RngCore;

use crate::error::{validate, Error, Result};

/// A field element; only the low `m` bits may be set
pub type GfElement = u16;

/// Log/antilog tables for GF(2^m)
#[derive(Clone, PartialEq, Eq)]
pub struct Gf2m {
    m: usize,
    polynomial: u32,
    generator: GfElement,
    // exp[i] = generator^i for i in [0, 2(q - 1)), so sums of two logs index it directly
    exp: Vec<GfElement>,
    // log[generator^i] = i; log[0] is a dummy 0 that callers mask out
    log: Vec<GfElement>,
}

impl fmt::Debug for Gf2m {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gf2m")
            .field("m", &self.m)
            .field("polynomial", &format_args!("{:#x}", self.polynomial))
            .field("generator", &self.generator)
            .finish()
    }
}

/// Carry-less product of `a` and `b` reduced modulo `polynomial`
///
/// Only used while building the tables.
fn mul_reduce(a: u32, b: u32, m: usize, polynomial: u32) -> u32 {
    let mut acc = 0u32;
    let mut a = a;
    let mut b = b;
    while b != 0 {
        if b & 1 == 1 {
            acc ^= a;
        }
        b >>= 1;
        a <<= 1;
        if a >> m & 1 == 1 {
            a ^= polynomial;
        }
    }
    acc
}

impl Gf2m {
    /// Build the field GF(2^m) from the fixed polynomial for `m`
    ///
    /// Fails with `Parameter` when `m` is outside `[2, 16]`, has no field
    /// polynomial, or the polynomial does not define a field.
    pub fn new(m: usize) -> Result<Self> {
        validate::parameter(
            (MIN_FIELD_EXPONENT..=MAX_FIELD_EXPONENT).contains(&m),
            "m",
            "field exponent must lie in [2, 16]",
        )?;
        let polynomial =
            field_polynomial(m).ok_or_else(|| Error::param("m", "no field polynomial for m"))?;

        let order = 1usize << m;
        let group = order - 1;

        for candidate in 2..order as u32 {
            if let Some(exp) = Self::powers_of(candidate, m, polynomial) {
                let mut log = vec![0 as GfElement; order];
                for (i, &e) in exp.iter().take(group).enumerate() {
                    log[e as usize] = i as GfElement;
                }
                log::debug!(
                    "GF(2^{}) built from polynomial {:#x} with generator {:#x}",
                    m,
                    polynomial,
                    candidate
                );
                return Ok(Self {
                    m,
                    polynomial,
                    generator: candidate as GfElement,
                    exp,
                    log,
                });
            }
        }

        Err(Error::param("m", "field polynomial has no primitive element"))
    }

    // Doubled power table of `g`, or None when `g` does not generate the
    // multiplicative group.
    fn powers_of(g: u32, m: usize, polynomial: u32) -> Option<Vec<GfElement>> {
        let group = (1usize << m) - 1;
        let mut exp = Vec::with_capacity(2 * group);
        let mut x = 1u32;
        for i in 0..group {
            if i > 0 && x == 1 {
                return None;
            }
            exp.push(x as GfElement);
            x = mul_reduce(x, g, m, polynomial);
        }
        if x != 1 {
            return None;
        }
        exp.extend_from_within(..group);
        Some(exp)
    }

    /// Field exponent `m`
    pub fn m(&self) -> usize {
        self.m
    }

    /// Number of field elements, `2^m`
    pub fn order(&self) -> usize {
        1 << self.m
    }

    /// The field polynomial, bit `i` holding the coefficient of `x^i`
    pub fn polynomial(&self) -> u32 {
        self.polynomial
    }

    /// The primitive element the tables are built from
    pub fn generator(&self) -> GfElement {
        self.generator
    }

    /// True if `a` is a reduced element of this field
    #[inline]
    pub fn contains(&self, a: GfElement) -> bool {
        (a as usize) < self.order()
    }

    /// Addition (and subtraction): bitwise XOR
    #[inline(always)]
    pub fn add(&self, a: GfElement, b: GfElement) -> GfElement {
        a ^ b
    }

    /// Multiplication
    ///
    /// Both operands must be reduced elements. The zero case is handled with
    /// a mask rather than a branch.
    ///
    /// # Panics
    ///
    /// Panics if either operand is not below `2^m`. The same holds for
    /// every table-driven operation of this type.
    #[inline]
    pub fn mul(&self, a: GfElement, b: GfElement) -> GfElement {
        let idx = self.log[a as usize] as usize + self.log[b as usize] as usize;
        let nonzero = !(ct_is_zero_u16(a) | ct_is_zero_u16(b));
        self.exp[idx] & nonzero
    }

    /// Squaring
    #[inline]
    pub fn square(&self, a: GfElement) -> GfElement {
        self.mul(a, a)
    }

    /// Multiplicative inverse; the inverse of zero is a `Domain` error
    pub fn inv(&self, a: GfElement) -> Result<GfElement> {
        if a == 0 {
            return Err(Error::domain("GF(2^m) inverse of zero"));
        }
        let group = self.order() - 1;
        Ok(self.exp[group - self.log[a as usize] as usize])
    }

    /// Division `a / b`; division by zero is a `Domain` error
    pub fn div(&self, a: GfElement, b: GfElement) -> Result<GfElement> {
        if b == 0 {
            return Err(Error::domain("GF(2^m) division by zero"));
        }
        let group = self.order() - 1;
        let idx = self.log[a as usize] as usize + group - self.log[b as usize] as usize;
        Ok(self.exp[idx] & !ct_is_zero_u16(a))
    }

    /// Inverse with zero mapped to zero, without branching on the input
    #[inline]
    pub(crate) fn inv_or_zero(&self, a: GfElement) -> GfElement {
        let group = self.order() - 1;
        self.exp[group - self.log[a as usize] as usize] & !ct_is_zero_u16(a)
    }

    /// Square root, the unique `r` with `r^2 = a`
    ///
    /// Squaring is a bijection in characteristic 2, so
    /// `sqrt(a) = a^(2^(m-1))`.
    #[inline]
    pub fn sqrt(&self, a: GfElement) -> GfElement {
        let group = (self.order() - 1) as u64;
        let idx = (self.log[a as usize] as u64) << (self.m - 1);
        self.exp[(idx % group) as usize] & !ct_is_zero_u16(a)
    }

    /// Exponentiation `a^e`, with `0^0 = 1`
    pub fn pow(&self, a: GfElement, e: u64) -> GfElement {
        if e == 0 {
            return 1;
        }
        if a == 0 {
            return 0;
        }
        let group = (self.order() - 1) as u64;
        let idx = (self.log[a as usize] as u64 * (e % group)) % group;
        self.exp[idx as usize]
    }

    /// Uniform random element
    pub fn random_element<R: RngCore + ?Sized>(&self, rng: &mut R) -> GfElement {
        (rng.next_u32() & (self.order() as u32 - 1)) as GfElement
    }

    /// Iterator over all field elements in canonical order
    pub fn elements(&self) -> impl Iterator<Item = GfElement> {
        (0..self.order()).map(|a| a as GfElement)
    }
}

#[cfg(test)]
mod tests;
