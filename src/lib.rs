//! # mecs
//!
//! The McEliece public-key cryptosystem over binary Goppa codes.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! mecs = "0.3"
//! ```
//!
//! ```
//! use mecs::prelude::*;
//! use mecs::zeroize::Zeroize;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let mut rng = ChaCha20Rng::seed_from_u64(1);
//! let params = McElieceParams::new(6, 5)?;
//! let (pk, sk) = mecs::pke::generate_keypair(&params, &mut rng)?;
//!
//! let plaintext = BinaryVector::random(params.k(), &mut rng);
//! let ciphertext = mecs::pke::encrypt(&pk, &plaintext, &mut rng)?;
//! let mut recovered = mecs::pke::decrypt(&sk, &ciphertext)?;
//! assert_eq!(recovered, plaintext);
//! recovered.zeroize();
//! # Ok::<(), mecs::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `pke` (default): the McEliece scheme
//! - `algorithms`: field, linear-algebra and Goppa code primitives
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`mecs-api`]: error type and traits
//! - [`mecs-params`]: field polynomials, retry caps and parameter sets
//! - [`mecs-algorithms`]: GF(2^m), GF(2) and Goppa code primitives
//! - [`mecs-pke`]: McEliece key generation, encryption and decryption

#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use mecs_api as api;
pub use mecs_internal as internal;
pub use mecs_params as params;

// Re-export workspace dependencies that users might need
pub use zeroize;

#[cfg(feature = "pke")]
pub use rand;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use mecs_algorithms as algorithms;

#[cfg(feature = "pke")]
pub use mecs_pke as pke;

/// Common imports for mecs users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{Pke, Serialize, SerializeSecret};

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{BinaryMatrix, BinaryVector};

    #[cfg(feature = "pke")]
    pub use crate::pke::{McEliece, McElieceContext, McElieceParams, PublicKey, SecretKey};
}
