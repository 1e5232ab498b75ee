//! Code-based primitives
//!
//! Polynomials over GF(2^m), binary Goppa codes built from a Goppa
//! polynomial and a support, and Patterson's syndrome decoder.

pub mod goppa;
pub mod patterson;
pub mod polynomial;

pub use goppa::GoppaCode;
pub use polynomial::GfPoly;
