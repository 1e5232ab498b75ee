//! Constant values for the mecs library
//!
//! Field polynomials, retry caps and named parameter sets used by the
//! algorithm and scheme crates.

pub mod pqc;
