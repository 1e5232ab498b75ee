//! Trait definitions shared by the mecs crates.

pub mod pke;
pub mod serialize;

pub use pke::Pke;
pub use serialize::{Serialize, SerializeSecret};
