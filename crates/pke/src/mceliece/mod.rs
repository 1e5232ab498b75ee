//! McEliece public-key encryption over binary Goppa codes
//!
//! A key pair is generated for runtime parameters `(m, t)`: the code has
//! length `n = 2^m`, dimension `k = n - m*t` and corrects `t` errors.
//! Plaintexts are `k`-bit vectors and ciphertexts are `n`-bit vectors.

use mecs_algorithms::BinaryVector;
use mecs_api::error::{Error as ApiError, Result};
use mecs_api::traits::Pke;
use rand::{CryptoRng, RngCore};

mod context;
mod decrypt;
mod encrypt;
mod keygen;
mod keys;
mod params;

pub use context::McElieceContext;
pub use keys::{PublicKey, SecretKey};
pub use params::{McElieceParams, KEY_HEADER_BYTES};

/// Generate a key pair for `params`
pub fn generate_keypair<R: RngCore + CryptoRng + ?Sized>(
    params: &McElieceParams,
    rng: &mut R,
) -> Result<(PublicKey, SecretKey)> {
    keygen::generate(params, rng).map_err(ApiError::from)
}

/// Encrypt a `k`-bit plaintext
///
/// Fails with `InvalidLength` if the plaintext is not exactly `k` bits.
pub fn encrypt<R: RngCore + CryptoRng + ?Sized>(
    public_key: &PublicKey,
    plaintext: &BinaryVector,
    rng: &mut R,
) -> Result<BinaryVector> {
    encrypt::encrypt(public_key, plaintext, rng).map_err(ApiError::from)
}

/// Decrypt an `n`-bit ciphertext
///
/// Fails with `InvalidLength` if the ciphertext is not exactly `n` bits and
/// with `DecodingFailure` if it is not within distance `t` of a codeword.
pub fn decrypt(secret_key: &SecretKey, ciphertext: &BinaryVector) -> Result<BinaryVector> {
    decrypt::decrypt(secret_key, ciphertext).map_err(ApiError::from)
}

/// McEliece over binary Goppa codes with Patterson decoding
pub struct McEliece;

impl Pke for McEliece {
    type Params = McElieceParams;
    type PublicKey = PublicKey;
    type SecretKey = SecretKey;
    type Plaintext = BinaryVector;
    type Ciphertext = BinaryVector;

    fn name() -> &'static str {
        "McEliece-Goppa-Patterson"
    }

    fn keypair<R: CryptoRng + RngCore>(
        params: &Self::Params,
        rng: &mut R,
    ) -> Result<(Self::PublicKey, Self::SecretKey)> {
        generate_keypair(params, rng)
    }

    fn encrypt<R: RngCore + CryptoRng>(
        pk_recipient: &Self::PublicKey,
        plaintext: &Self::Plaintext,
        rng: &mut R,
    ) -> Result<Self::Ciphertext> {
        encrypt(pk_recipient, plaintext, rng)
    }

    fn decrypt(
        sk_recipient: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> Result<Self::Plaintext> {
        decrypt(sk_recipient, ciphertext)
    }
}
