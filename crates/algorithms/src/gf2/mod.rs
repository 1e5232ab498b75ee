//! Linear algebra over GF(2)
//!
//! Word-packed bit vectors and matrices, plus position permutations. These
//! carry codewords, generator and parity-check matrices, and the masking
//! data of a McEliece key.

pub mod matrix;
pub mod permutation;
pub mod vector;

pub use matrix::BinaryMatrix;
pub use permutation::Permutation;
pub use vector::{bytes_for, BinaryVector};
