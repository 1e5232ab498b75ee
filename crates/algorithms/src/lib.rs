//! Algebraic and coding primitives for the mecs McEliece implementation
//!
//! This crate provides the building blocks the cryptosystem is assembled
//! from:
//!
//! - [`gf2m`]: log/antilog table arithmetic in GF(2^m)
//! - [`gf2`]: word-packed bit vectors, bit matrices with Gauss-Jordan
//!   reduction, and position permutations
//! - [`code`]: polynomials over GF(2^m), binary Goppa codes and Patterson's
//!   decoder
//!
//! All randomness is drawn from a caller-supplied RNG. Operations on secret
//! data that the decoder performs (syndrome accumulation, root search,
//! vector-matrix products) visit every position and combine through masks.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// GF(2^m) field engine
pub mod gf2m;
pub use gf2m::{Gf2m, GfElement};

// GF(2) vectors, matrices and permutations
pub mod gf2;
pub use gf2::{bytes_for, BinaryMatrix, BinaryVector, Permutation};

// Goppa codes and decoding
pub mod code;
pub use code::{patterson, GfPoly, GoppaCode};
