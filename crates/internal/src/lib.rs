//! Internal utilities for the mecs library
//!
//! Constant-time helpers and fixed-width integer encoding shared by the
//! algorithm and scheme crates. Not part of the public API contract.

pub mod constant_time;
pub mod endian;
