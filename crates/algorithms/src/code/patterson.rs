//! Patterson's algorithm for decoding binary Goppa codes

use super::goppa::GoppaCode;
use super::polynomial::GfPoly;
use crate::error::{Error, Result};
use crate::gf2::BinaryVector;

/// Solve `a = b * tau (mod g)` with `deg a <= t/2` by a truncated
/// extended Euclidean algorithm, returning `(a, b)`
fn solve_key_equation(code: &GoppaCode, tau: &GfPoly) -> Result<(GfPoly, GfPoly)> {
    let field = code.field();
    let bound = code.t() / 2;

    let mut r_prev = code.goppa_polynomial().clone();
    let mut r_cur = tau.clone();
    let mut b_prev = GfPoly::zero();
    let mut b_cur = GfPoly::one();

    while r_cur.degree().map_or(false, |d| d > bound) {
        let (q, r) = r_prev.divrem(field, &r_cur)?;
        let b_next = b_prev.add(&q.mul(field, &b_cur));
        r_prev = r_cur;
        r_cur = r;
        b_prev = b_cur;
        b_cur = b_next;
    }

    Ok((r_cur, b_cur))
}

/// Locate the errors in `word`, a codeword of `code` plus an error pattern
///
/// Returns the error vector. Fails with `DecodingFailure` unless exactly
/// `t` error positions are located; an error-free word counts as a failure
/// because every valid ciphertext carries `t` errors.
pub fn decode(code: &GoppaCode, word: &BinaryVector) -> Result<BinaryVector> {
    let field = code.field();
    let g = code.goppa_polynomial();
    let t = code.t();

    let syndrome = code.syndrome(word)?;
    if syndrome.is_zero() {
        return Err(Error::DecodingFailure {
            expected: t,
            located: 0,
        });
    }

    // T = S^-1, tau = sqrt(T + x)
    let t_poly = syndrome.inv_mod(field, g)?;
    let tau = t_poly.add(&GfPoly::x()).sqrt_mod(field, code.sqrt_x(), g)?;

    let (a, b) = solve_key_equation(code, &tau)?;

    // sigma = a^2 + x * b^2
    let sigma = a.square(field).add(&b.square(field).mul(field, &GfPoly::x()));

    let errors = code.roots_on_support(&sigma);
    let located = errors.weight();
    if located != t {
        log::debug!("decoder located {} errors, expected {}", located, t);
        return Err(Error::DecodingFailure {
            expected: t,
            located,
        });
    }
    Ok(errors)
}
