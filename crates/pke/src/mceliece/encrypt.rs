//! McEliece encryption

use mecs_algorithms::BinaryVector;
use mecs_api::error::validate;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use super::keys::PublicKey;
use crate::error::Result;

/// Encrypt a `k`-bit plaintext: `c = p * G' + e` with `e` of weight exactly `t`
///
/// A fresh error vector is drawn from `rng` on every call.
pub(crate) fn encrypt<R: RngCore + CryptoRng + ?Sized>(
    public_key: &PublicKey,
    plaintext: &BinaryVector,
    rng: &mut R,
) -> Result<BinaryVector> {
    let params = public_key.params();
    validate::length("McEliece plaintext", plaintext.len(), params.k())?;

    let mut ciphertext = public_key.generator().vector_mul(plaintext)?;
    let mut error = BinaryVector::random_with_weight(params.n(), params.t(), rng)?;
    ciphertext.xor_assign(&error)?;
    error.zeroize();
    Ok(ciphertext)
}
