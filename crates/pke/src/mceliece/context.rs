//! A McEliece instance owning its parameters and key pair

use mecs_algorithms::BinaryVector;
use mecs_api::error::{validate, Result};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use super::keys::{PublicKey, SecretKey};
use super::params::McElieceParams;
use super::{decrypt, encrypt, generate_keypair};

/// Parameters plus a matching key pair
///
/// Read-only after construction until [`McElieceContext::regenerate`] or
/// [`McElieceContext::destroy`]. The secret key is zeroized when the
/// context is destroyed or dropped.
#[derive(Debug)]
pub struct McElieceContext {
    params: McElieceParams,
    public_key: PublicKey,
    secret_key: SecretKey,
}

impl McElieceContext {
    /// Generate a fresh key pair for `params`
    pub fn generate<R: RngCore + CryptoRng + ?Sized>(
        params: McElieceParams,
        rng: &mut R,
    ) -> Result<Self> {
        let (public_key, secret_key) = generate_keypair(&params, rng)?;
        Ok(Self {
            params,
            public_key,
            secret_key,
        })
    }

    /// Assemble a context from previously generated keys
    ///
    /// Both keys must carry the same `(m, t)`.
    pub fn from_keys(public_key: PublicKey, secret_key: SecretKey) -> Result<Self> {
        validate::key(
            public_key.params() == secret_key.params(),
            "McEliece context",
            "public and secret key parameters differ",
        )?;
        Ok(Self {
            params: public_key.params().clone(),
            public_key,
            secret_key,
        })
    }

    /// Parameters of this instance
    pub fn params(&self) -> &McElieceParams {
        &self.params
    }

    /// The public key
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// The secret key
    pub fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }

    /// Encrypt a `k`-bit plaintext under this instance's public key
    pub fn encrypt<R: RngCore + CryptoRng + ?Sized>(
        &self,
        plaintext: &BinaryVector,
        rng: &mut R,
    ) -> Result<BinaryVector> {
        encrypt(&self.public_key, plaintext, rng)
    }

    /// Decrypt an `n`-bit ciphertext with this instance's secret key
    pub fn decrypt(&self, ciphertext: &BinaryVector) -> Result<BinaryVector> {
        decrypt(&self.secret_key, ciphertext)
    }

    /// Replace the key pair with a fresh one
    ///
    /// On failure the current keys are kept unchanged.
    pub fn regenerate<R: RngCore + CryptoRng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        let (public_key, secret_key) = generate_keypair(&self.params, rng)?;
        self.public_key = public_key;
        self.secret_key = secret_key;
        Ok(())
    }

    /// Release the instance, zeroizing all secret key material
    pub fn destroy(mut self) {
        self.secret_key.zeroize();
        log::debug!("McEliece context destroyed");
    }
}
