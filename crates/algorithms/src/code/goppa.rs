//! Binary Goppa codes

use std::sync::Arc;

use mecs_internal::constant_time::ct_mask_u64;
use zeroize::Zeroize;

use super::polynomial::GfPoly;
use crate::error::{validate, Error, Result};
use crate::gf2::{BinaryMatrix, BinaryVector};
use crate::gf2m::{Gf2m, GfElement};

/// The binary Goppa code `Γ(L, g)` for a support `L` and Goppa polynomial `g`
///
/// Codeword position `j` corresponds to the support element `L[j]`. The
/// evaluations `g(L[j])^-1` and `sqrt(x) mod g` are precomputed for the
/// decoder. Everything except the field tables is secret.
#[derive(Clone)]
pub struct GoppaCode {
    field: Arc<Gf2m>,
    goppa: GfPoly,
    support: Vec<GfElement>,
    inv_at_support: Vec<GfElement>,
    sqrt_x: GfPoly,
}

impl GoppaCode {
    /// Build the code, validating `g` against the support
    ///
    /// `g` must be monic of degree at least 2 and must not vanish at any
    /// support element; the support must consist of distinct field elements.
    pub fn new(field: Arc<Gf2m>, goppa: GfPoly, support: Vec<GfElement>) -> Result<Self> {
        let t = goppa.degree().unwrap_or(0);
        validate::parameter(t >= 2, "goppa", "Goppa polynomial degree must be at least 2")?;
        validate::parameter(goppa.is_monic(), "goppa", "Goppa polynomial must be monic")?;
        validate::parameter(
            goppa.coeffs().iter().all(|&c| field.contains(c)),
            "goppa",
            "coefficient outside the field",
        )?;
        validate::parameter(
            support.len() <= field.order() && field.m() * t < support.len(),
            "support",
            "support length must exceed m*t and not exceed the field order",
        )?;

        let mut seen = vec![false; field.order()];
        for &a in &support {
            if !field.contains(a) || seen[a as usize] {
                return Err(Error::InvalidInput {
                    context: "Goppa support",
                    reason: "support elements must be distinct field elements",
                });
            }
            seen[a as usize] = true;
        }

        let mut inv_at_support = Vec::with_capacity(support.len());
        for &a in &support {
            let value = goppa.eval(&field, a);
            if value == 0 {
                return Err(Error::InvalidInput {
                    context: "Goppa polynomial",
                    reason: "polynomial vanishes on the support",
                });
            }
            inv_at_support.push(field.inv_or_zero(value));
        }

        // sqrt(x) = x^(2^(mt - 1)) mod g
        let mut sqrt_x = GfPoly::x();
        for _ in 1..field.m() * t {
            sqrt_x = sqrt_x.square(&field).rem(&field, &goppa)?;
        }

        Ok(Self {
            field,
            goppa,
            support,
            inv_at_support,
            sqrt_x,
        })
    }

    /// The field the code is defined over
    pub fn field(&self) -> &Arc<Gf2m> {
        &self.field
    }

    /// The Goppa polynomial `g`
    pub fn goppa_polynomial(&self) -> &GfPoly {
        &self.goppa
    }

    /// Support elements in codeword order
    pub fn support(&self) -> &[GfElement] {
        &self.support
    }

    /// `sqrt(x) mod g`
    pub fn sqrt_x(&self) -> &GfPoly {
        &self.sqrt_x
    }

    /// Error-correction capability `t = deg g`
    pub fn t(&self) -> usize {
        self.goppa.degree().unwrap_or(0)
    }

    /// Code length `n`
    pub fn len(&self) -> usize {
        self.support.len()
    }

    /// True for an empty support (never the case for a constructed code)
    pub fn is_empty(&self) -> bool {
        self.support.is_empty()
    }

    /// Binary parity-check matrix of size `m*t x n`
    ///
    /// Column `j` holds `L[j]^i / g(L[j])` for `i = 0..t`, each element
    /// expanded into `m` bits: bit `b` of the `i`-th element is row `i*m + b`.
    pub fn parity_check_matrix(&self) -> BinaryMatrix {
        let m = self.field.m();
        let t = self.t();
        let mut h = BinaryMatrix::zeros(m * t, self.len());
        for (j, (&a, &inv)) in self.support.iter().zip(&self.inv_at_support).enumerate() {
            let mut entry = inv;
            for i in 0..t {
                for b in 0..m {
                    h.set(i * m + b, j, entry >> b & 1 == 1);
                }
                entry = self.field.mul(entry, a);
            }
        }
        h
    }

    /// Syndrome polynomial `S(x) = sum over c_j = 1 of (x - L[j])^-1 mod g`
    ///
    /// `(x - a)^-1 mod g` is the quotient of `g` by `x - a`, scaled by
    /// `g(a)^-1`. Every position contributes through a mask, so the work
    /// done does not depend on which bits of `word` are set.
    pub fn syndrome(&self, word: &BinaryVector) -> Result<GfPoly> {
        validate::length("Goppa syndrome input", word.len(), self.len())?;
        let t = self.t();
        let g = self.goppa.coeffs();
        let mut acc = vec![0 as GfElement; t];
        let mut q = vec![0 as GfElement; t];

        for (j, (&a, &inv)) in self.support.iter().zip(&self.inv_at_support).enumerate() {
            // synthetic division of g by (x - a)
            q[t - 1] = g[t];
            for i in (1..t).rev() {
                q[i - 1] = self.field.add(g[i], self.field.mul(a, q[i]));
            }
            let mask = ct_mask_u64(word.get(j) as u64) as GfElement;
            for (s, &qi) in acc.iter_mut().zip(&q) {
                *s ^= self.field.mul(qi, inv) & mask;
            }
        }
        q.zeroize();
        Ok(GfPoly::from_coeffs(acc))
    }

    /// Mark the support positions where `sigma` vanishes
    ///
    /// Evaluates `sigma` at every support element; no position is skipped.
    pub fn roots_on_support(&self, sigma: &GfPoly) -> BinaryVector {
        let mut errors = BinaryVector::new(self.len());
        for (j, &a) in self.support.iter().enumerate() {
            errors.set(j, sigma.eval(&self.field, a) == 0);
        }
        errors
    }
}

impl Zeroize for GoppaCode {
    fn zeroize(&mut self) {
        self.goppa.zeroize();
        self.support.zeroize();
        self.inv_at_support.zeroize();
        self.sqrt_x.zeroize();
    }
}

impl PartialEq for GoppaCode {
    fn eq(&self, other: &Self) -> bool {
        self.field.m() == other.field.m()
            && self.goppa == other.goppa
            && self.support == other.support
    }
}

impl Eq for GoppaCode {}

impl core::fmt::Debug for GoppaCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GoppaCode")
            .field("m", &self.field.m())
            .field("t", &self.t())
            .field("n", &self.len())
            .finish_non_exhaustive()
    }
}
