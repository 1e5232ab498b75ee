//! McEliece decryption

use mecs_algorithms::{patterson, BinaryVector};
use mecs_api::error::validate;
use zeroize::Zeroize;

use super::keys::SecretKey;
use crate::error::Result;

/// Decrypt an `n`-bit ciphertext
///
/// Undoes the column permutation, removes the `t` errors located by the
/// Goppa decoder, reads `p * S` from the information positions of the
/// systematic codeword and multiplies by `S^-1`.
pub(crate) fn decrypt(secret_key: &SecretKey, ciphertext: &BinaryVector) -> Result<BinaryVector> {
    let params = secret_key.params();
    validate::length("McEliece ciphertext", ciphertext.len(), params.n())?;

    let mut word = secret_key.permutation_inv().apply(ciphertext)?;
    let decoded = patterson::decode(secret_key.code(), &word);
    let mut errors = match decoded {
        Ok(errors) => errors,
        Err(e) => {
            word.zeroize();
            return Err(e.into());
        }
    };
    word.xor_assign(&errors)?;
    errors.zeroize();

    let mut scrambled = word.slice(params.redundancy(), params.n())?;
    word.zeroize();
    let plaintext = secret_key.scrambler_inv().vector_mul(&scrambled)?;
    scrambled.zeroize();
    Ok(plaintext)
}
