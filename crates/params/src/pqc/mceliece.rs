//! Constants for the Goppa-code McEliece cryptosystem

/// Smallest supported field exponent `m`
pub const MIN_FIELD_EXPONENT: usize = 2;

/// Largest supported field exponent `m`; elements must fit in a `u16`
pub const MAX_FIELD_EXPONENT: usize = 16;

/// Smallest supported error weight `t`
///
/// A degree-1 Goppa polynomial always has a root in the full-field support.
pub const MIN_ERROR_WEIGHT: usize = 2;

/// Fixed irreducible polynomial defining GF(2^m), indexed by `m`
///
/// Bit `i` is the coefficient of `x^i`. Zero marks an unsupported exponent.
pub const GF2M_POLYNOMIALS: [u32; MAX_FIELD_EXPONENT + 1] = [
    0,
    0,
    0x7,     // x^2 + x + 1
    0xB,     // x^3 + x + 1
    0x13,    // x^4 + x + 1
    0x25,    // x^5 + x^2 + 1
    0x43,    // x^6 + x + 1
    0x89,    // x^7 + x^3 + 1
    0x11D,   // x^8 + x^4 + x^3 + x^2 + 1
    0x211,   // x^9 + x^4 + 1
    0x409,   // x^10 + x^3 + 1
    0x805,   // x^11 + x^2 + 1
    0x1053,  // x^12 + x^6 + x^4 + x + 1
    0x201B,  // x^13 + x^4 + x^3 + x + 1
    0x4443,  // x^14 + x^10 + x^6 + x + 1
    0x8003,  // x^15 + x + 1
    0x1100B, // x^16 + x^12 + x^3 + x + 1
];

/// Look up the field polynomial for `m`
pub const fn field_polynomial(m: usize) -> Option<u32> {
    if m > MAX_FIELD_EXPONENT || GF2M_POLYNOMIALS[m] == 0 {
        None
    } else {
        Some(GF2M_POLYNOMIALS[m])
    }
}

/// Random monic polynomials tried before the irreducible search gives up
pub const MAX_IRREDUCIBLE_ATTEMPTS: usize = 10_000;

/// Goppa polynomials tried before key generation gives up
pub const MAX_GOPPA_ATTEMPTS: usize = 16;

/// Support permutations tried per Goppa polynomial when the parity-check
/// matrix cannot be brought into systematic form
pub const MAX_SUPPORT_SHUFFLES: usize = 4;

/// Random `k x k` matrices tried before the scrambler search gives up
pub const MAX_SCRAMBLER_ATTEMPTS: usize = 128;

/// Version byte leading every encoded key
pub const KEY_FORMAT_VERSION: u8 = 1;

/// Structure containing a named McEliece parameter set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoppaMcElieceParams {
    /// Field exponent; the field is GF(2^m)
    pub m: usize,

    /// Error correction capability (Goppa polynomial degree)
    pub t: usize,

    /// Code length, `2^m`
    pub n: usize,

    /// Code dimension, `n - m*t`
    pub k: usize,
}

/// Toy parameters for tests: 16-bit ciphertexts, 8-bit plaintexts
pub const MECS_TOY_4_2: GoppaMcElieceParams = GoppaMcElieceParams {
    m: 4,
    t: 2,
    n: 16,
    k: 8,
};

/// m = 10, t = 50
pub const MECS_1024_50: GoppaMcElieceParams = GoppaMcElieceParams {
    m: 10,
    t: 50,
    n: 1024,
    k: 524,
};

/// m = 11, t = 50 (command-line default)
pub const MECS_2048_50: GoppaMcElieceParams = GoppaMcElieceParams {
    m: 11,
    t: 50,
    n: 2048,
    k: 1498,
};

/// m = 12, t = 64
pub const MECS_4096_64: GoppaMcElieceParams = GoppaMcElieceParams {
    m: 12,
    t: 64,
    n: 4096,
    k: 3328,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polynomial_degrees_match_exponent() {
        for m in MIN_FIELD_EXPONENT..=MAX_FIELD_EXPONENT {
            let poly = field_polynomial(m).unwrap();
            assert_eq!(32 - poly.leading_zeros() - 1, m as u32, "m = {}", m);
            // constant term must be set or x divides the polynomial
            assert_eq!(poly & 1, 1, "m = {}", m);
        }
        assert_eq!(field_polynomial(0), None);
        assert_eq!(field_polynomial(1), None);
        assert_eq!(field_polynomial(17), None);
    }

    #[test]
    fn test_named_sets_are_consistent() {
        for set in [MECS_TOY_4_2, MECS_1024_50, MECS_2048_50, MECS_4096_64] {
            assert_eq!(set.n, 1 << set.m);
            assert_eq!(set.k, set.n - set.m * set.t);
        }
    }
}
