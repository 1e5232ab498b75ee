//! McEliece key types and their byte encodings
//!
//! Both encodings start with `version (u8) || m (u8) || t (u16 LE)`.
//!
//! Public key: the header followed by the `k` rows of `G'`, each
//! `ceil(n / 8)` bytes with bit `j` at byte `j / 8`, bit `j % 8`.
//!
//! Secret key: the header, the `t + 1` coefficients of `g` (constant term
//! first), the `n` support elements, the `n` entries of the inverse column
//! permutation (all u16 LE), then the `k` rows of `S^-1`, each
//! `ceil(k / 8)` bytes.

use std::fmt;

use mecs_algorithms::{BinaryMatrix, GfPoly, GoppaCode, Permutation};
use mecs_api::error::{validate, Error as ApiError, Result as ApiResult, ResultExt};
use mecs_api::{Serialize, SerializeSecret};
use mecs_internal::constant_time::ct_eq;
use mecs_internal::endian::{put_u16_le, u16_from_le_bytes, u16_vec_from_le_bytes};
use mecs_params::pqc::mceliece::KEY_FORMAT_VERSION;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::params::{McElieceParams, KEY_HEADER_BYTES};
use crate::error::Error as PkeError;

/// Public key: the masked generator matrix `G' = S * G * P` (`k x n`)
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey {
    params: McElieceParams,
    generator: BinaryMatrix,
}

impl PublicKey {
    pub(crate) fn new(params: McElieceParams, generator: BinaryMatrix) -> Self {
        Self { params, generator }
    }

    /// Parameters the key was generated for
    pub fn params(&self) -> &McElieceParams {
        &self.params
    }

    /// The public generator matrix `G'`
    pub fn generator(&self) -> &BinaryMatrix {
        &self.generator
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// Secret key: the Goppa code, the inverse column permutation and `S^-1`
///
/// Zeroized on drop.
#[derive(Clone)]
pub struct SecretKey {
    params: McElieceParams,
    code: GoppaCode,
    permutation_inv: Permutation,
    scrambler_inv: BinaryMatrix,
}

impl SecretKey {
    pub(crate) fn new(
        params: McElieceParams,
        code: GoppaCode,
        permutation_inv: Permutation,
        scrambler_inv: BinaryMatrix,
    ) -> Self {
        Self {
            params,
            code,
            permutation_inv,
            scrambler_inv,
        }
    }

    /// Parameters the key was generated for
    pub fn params(&self) -> &McElieceParams {
        &self.params
    }

    /// The private Goppa code (polynomial and support)
    pub fn code(&self) -> &GoppaCode {
        &self.code
    }

    /// Permutation undoing the public column permutation
    pub fn permutation_inv(&self) -> &Permutation {
        &self.permutation_inv
    }

    /// Inverse of the scrambling matrix `S`
    pub fn scrambler_inv(&self) -> &BinaryMatrix {
        &self.scrambler_inv
    }
}

impl Zeroize for SecretKey {
    fn zeroize(&mut self) {
        self.code.zeroize();
        self.permutation_inv.zeroize();
        self.scrambler_inv.zeroize();
    }
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for SecretKey {}

impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        self.params == other.params
            && ct_eq(&self.to_bytes_zeroizing(), &other.to_bytes_zeroizing())
    }
}

impl Eq for SecretKey {}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

fn encode_header(params: &McElieceParams, out: &mut Vec<u8>) {
    out.push(KEY_FORMAT_VERSION);
    out.push(params.m() as u8);
    put_u16_le(out, params.t() as u16);
}

/// Parse and validate the common header, returning the parameters
fn decode_header(bytes: &[u8], context: &'static str) -> ApiResult<McElieceParams> {
    validate::min_length(context, bytes.len(), KEY_HEADER_BYTES)?;
    validate::key(bytes[0] == KEY_FORMAT_VERSION, context, "unknown key format version")?;
    let m = bytes[1] as usize;
    let t = u16_from_le_bytes(bytes, 2).unwrap_or(0) as usize;
    McElieceParams::new(m, t).map_err(|e| ApiError::InvalidKey {
        context,
        message: e.to_string(),
    })
}

impl Serialize for PublicKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        let params = decode_header(bytes, "McEliece public key")?;
        validate::length("McEliece public key", bytes.len(), params.public_key_bytes())?;
        let generator =
            BinaryMatrix::from_bytes(params.k(), params.n(), &bytes[KEY_HEADER_BYTES..]).map_err(
                |_| ApiError::from(PkeError::InvalidKeyFormat("non-zero padding bits in G'")),
            )?;
        Ok(Self { params, generator })
    }

    fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.params.public_key_bytes());
        encode_header(&self.params, &mut out);
        out.extend_from_slice(&self.generator.to_bytes());
        out
    }
}

impl SerializeSecret for SecretKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        let params = decode_header(bytes, "McEliece secret key")?;
        validate::length("McEliece secret key", bytes.len(), params.secret_key_bytes())?;
        decode_secret_body(params, &bytes[KEY_HEADER_BYTES..])
            .with_context("McEliece secret key")
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        let mut out = Zeroizing::new(Vec::with_capacity(self.params.secret_key_bytes()));
        encode_header(&self.params, &mut out);
        for &c in self.code.goppa_polynomial().coeffs() {
            put_u16_le(&mut out, c);
        }
        for &a in self.code.support() {
            put_u16_le(&mut out, a);
        }
        for &p in self.permutation_inv.as_slice() {
            put_u16_le(&mut out, p as u16);
        }
        let mut matrix = self.scrambler_inv.to_bytes();
        out.extend_from_slice(&matrix);
        matrix.zeroize();
        out
    }
}

fn decode_secret_body(params: McElieceParams, body: &[u8]) -> Result<SecretKey, PkeError> {
    let (t, n, k) = (params.t(), params.n(), params.k());
    let goppa_len = 2 * (t + 1);
    let (goppa_bytes, rest) = body.split_at(goppa_len);
    let (support_bytes, rest) = rest.split_at(2 * n);
    let (perm_bytes, matrix_bytes) = rest.split_at(2 * n);

    let coeffs = u16_vec_from_le_bytes(goppa_bytes, t + 1)
        .ok_or(PkeError::InvalidKeyFormat("truncated Goppa polynomial"))?;
    let goppa = GfPoly::from_coeffs(coeffs);
    if goppa.degree() != Some(t) || !goppa.is_monic() {
        return Err(PkeError::InvalidKeyFormat("Goppa polynomial is not monic of degree t"));
    }
    if goppa.coeffs().iter().any(|&c| !params.field().contains(c)) {
        return Err(PkeError::InvalidKeyFormat("Goppa coefficient outside the field"));
    }
    if !goppa.is_irreducible(params.field())? {
        return Err(PkeError::InvalidKeyFormat("Goppa polynomial is reducible"));
    }

    let support = u16_vec_from_le_bytes(support_bytes, n)
        .ok_or(PkeError::InvalidKeyFormat("truncated support"))?;
    // distinct field elements filling the whole field
    let code = GoppaCode::new(params.field().clone(), goppa, support)
        .map_err(|_| PkeError::InvalidKeyFormat("support is not a permutation of the field"))?;

    let perm = u16_vec_from_le_bytes(perm_bytes, n)
        .ok_or(PkeError::InvalidKeyFormat("truncated permutation"))?;
    let permutation_inv = Permutation::from_vec(perm.into_iter().map(usize::from).collect())
        .map_err(|_| PkeError::InvalidKeyFormat("column permutation is not a bijection"))?;

    let scrambler_inv = BinaryMatrix::from_bytes(k, k, matrix_bytes)
        .map_err(|_| PkeError::InvalidKeyFormat("non-zero padding bits in S^-1"))?;
    if scrambler_inv.rank() != k {
        return Err(PkeError::InvalidKeyFormat("S^-1 is singular"));
    }

    Ok(SecretKey::new(params, code, permutation_inv, scrambler_inv))
}

