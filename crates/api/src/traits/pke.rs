//! Trait definition for Public Key Encryption (PKE) schemes.

use super::serialize::{Serialize, SerializeSecret};
use crate::error::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Trait for Public Key Encryption schemes with runtime parameter selection.
///
/// Code-based schemes are instantiated from a runtime parameter value (the
/// field exponent and error weight), so key generation takes `Params`
/// explicitly. Plaintexts and ciphertexts are scheme-defined block types
/// rather than byte strings.
pub trait Pke {
    /// Runtime parameters the key pair is generated for.
    type Params: Clone;

    /// Public key type for the PKE scheme.
    ///
    /// # Security Note
    /// Implements `Serialize` to guarantee safe `from_bytes` and `to_bytes` methods.
    type PublicKey: Clone + Serialize;

    /// Secret key type for the PKE scheme.
    ///
    /// # Security Note
    /// - Implements `Zeroize` for secure memory cleanup.
    /// - Implements `SerializeSecret` for zeroizing export.
    type SecretKey: Zeroize + Clone + SerializeSecret;

    /// Fixed-size plaintext block.
    type Plaintext;

    /// Ciphertext block produced by the PKE scheme.
    type Ciphertext: Clone;

    /// Returns the PKE algorithm name.
    fn name() -> &'static str;

    /// Generates a new key pair for the given parameters.
    ///
    /// # Security Requirements
    /// - Must use the provided CSPRNG for all randomness.
    fn keypair<R: CryptoRng + RngCore>(
        params: &Self::Params,
        rng: &mut R,
    ) -> Result<(Self::PublicKey, Self::SecretKey)>;

    /// Encrypts a plaintext block using the recipient's public key.
    ///
    /// # Arguments
    /// * `pk_recipient` - The recipient's public key.
    /// * `plaintext` - The block to encrypt.
    /// * `rng` - A cryptographically secure random number generator; fresh
    ///   randomness must be drawn on every call.
    fn encrypt<R: RngCore + CryptoRng>(
        pk_recipient: &Self::PublicKey,
        plaintext: &Self::Plaintext,
        rng: &mut R,
    ) -> Result<Self::Ciphertext>;

    /// Decrypts a ciphertext block using the recipient's secret key.
    fn decrypt(
        sk_recipient: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> Result<Self::Plaintext>;
}
