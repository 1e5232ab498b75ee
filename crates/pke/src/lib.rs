//! Public Key Encryption (PKE) schemes for the mecs library.
//!
//! The crate implements the McEliece cryptosystem over binary Goppa codes:
//! parameter validation, key generation with bounded retries, encryption
//! with a fresh weight-`t` error vector, and decryption through Patterson's
//! decoder. Keys serialize to a fixed little-endian layout.

#![forbid(unsafe_code)]

pub mod error;
pub mod mceliece;

// Re-export key items
pub use error::{Error, Result};
pub use mceliece::{
    decrypt, encrypt, generate_keypair, McEliece, McElieceContext, McElieceParams, PublicKey,
    SecretKey,
};
