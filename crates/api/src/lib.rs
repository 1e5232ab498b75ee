//! Public API traits and types for the mecs library
//!
//! This crate provides the public API surface for the mecs workspace: the
//! error type every layer converts into, small validation helpers, and the
//! trait definitions implemented by the McEliece scheme.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

// Re-export all traits from the traits module
pub use traits::{Pke, Serialize, SerializeSecret};

// Re-export trait modules for direct access
pub use traits::{pke, serialize};
