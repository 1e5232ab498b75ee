//! Runtime parameters of a McEliece instance

use std::fmt;
use std::sync::Arc;

use mecs_algorithms::{bytes_for, Gf2m};
use mecs_api::error::{validate, Result};
use mecs_params::pqc::mceliece::{GoppaMcElieceParams, MIN_ERROR_WEIGHT};

/// Size of the `version || m || t` header that leads every encoded key
pub const KEY_HEADER_BYTES: usize = 4;

/// Parameters `(m, t)` with the derived code sizes and the field tables
///
/// The field tables are shared between every key and context built from the
/// same parameters.
#[derive(Clone)]
pub struct McElieceParams {
    m: usize,
    t: usize,
    n: usize,
    k: usize,
    field: Arc<Gf2m>,
}

impl McElieceParams {
    /// Validate `(m, t)` and build the field
    ///
    /// Fails with `UnsupportedParameter` if `m` has no field polynomial,
    /// `t < 2`, or the code dimension `k = 2^m - m*t` is not positive.
    pub fn new(m: usize, t: usize) -> Result<Self> {
        let field = Gf2m::new(m).map_err(mecs_api::Error::from)?;
        let n = field.order();
        validate::parameter(
            t >= MIN_ERROR_WEIGHT,
            "t",
            "error weight must be at least 2",
        )?;
        validate::parameter(
            m.checked_mul(t).map_or(false, |mt| mt < n),
            "t",
            "code dimension k = n - m*t must be positive",
        )?;
        let k = n - m * t;
        log::debug!("McEliece parameters: m = {}, t = {}, n = {}, k = {}", m, t, n, k);
        Ok(Self {
            m,
            t,
            n,
            k,
            field: Arc::new(field),
        })
    }

    /// Parameters for a named set
    pub fn from_set(set: &GoppaMcElieceParams) -> Result<Self> {
        Self::new(set.m, set.t)
    }

    /// Field exponent
    pub fn m(&self) -> usize {
        self.m
    }

    /// Error weight
    pub fn t(&self) -> usize {
        self.t
    }

    /// Code length, also the ciphertext length in bits
    pub fn n(&self) -> usize {
        self.n
    }

    /// Code dimension, also the plaintext length in bits
    pub fn k(&self) -> usize {
        self.k
    }

    /// Redundancy `m*t`, the number of parity-check rows
    pub fn redundancy(&self) -> usize {
        self.m * self.t
    }

    /// Shared field tables
    pub fn field(&self) -> &Arc<Gf2m> {
        &self.field
    }

    /// Plaintext size in bytes when encoded as a bit vector
    pub fn plaintext_bytes(&self) -> usize {
        bytes_for(self.k)
    }

    /// Ciphertext size in bytes when encoded as a bit vector
    pub fn ciphertext_bytes(&self) -> usize {
        bytes_for(self.n)
    }

    /// Encoded public key size
    pub fn public_key_bytes(&self) -> usize {
        KEY_HEADER_BYTES + self.k * bytes_for(self.n)
    }

    /// Encoded secret key size
    pub fn secret_key_bytes(&self) -> usize {
        KEY_HEADER_BYTES + 2 * (self.t + 1) + 2 * self.n + 2 * self.n + self.k * bytes_for(self.k)
    }
}

impl PartialEq for McElieceParams {
    fn eq(&self, other: &Self) -> bool {
        self.m == other.m && self.t == other.t
    }
}

impl Eq for McElieceParams {}

impl fmt::Debug for McElieceParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("McElieceParams")
            .field("m", &self.m)
            .field("t", &self.t)
            .field("n", &self.n)
            .field("k", &self.k)
            .finish()
    }
}
