//! Error type definitions for mecs operations

use thiserror::Error;

/// Primary error type for cryptosystem operations
///
/// Every crate of the workspace converts its local error into this type at
/// the public boundary, so callers match on a single taxonomy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Unsupported `m`/`t` combination
    #[error("unsupported parameter: {context}: {message}")]
    UnsupportedParameter {
        context: &'static str,
        message: String,
    },

    /// Key generation gave up after exhausting its retry caps
    #[error("key generation failed: {context}: {message}")]
    KeyGeneration {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Malformed input that has the right length
    #[error("invalid input: {context}: {message}")]
    InvalidInput {
        context: &'static str,
        message: String,
    },

    /// Undefined field or polynomial operation, such as the inverse of zero
    #[error("undefined operation: {context}")]
    Domain { context: &'static str },

    /// The decoder located a number of errors other than `t`
    #[error("decoding failure: {context} (expected {expected} errors, located {located})")]
    DecodingFailure {
        context: &'static str,
        expected: usize,
        located: usize,
    },

    /// Invalid key error
    #[error("invalid key: {context}: {message}")]
    InvalidKey {
        context: &'static str,
        message: String,
    },
}

/// Result type for cryptosystem operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its payload
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::UnsupportedParameter { message, .. } => {
                Self::UnsupportedParameter { context, message }
            }
            Self::KeyGeneration { message, .. } => Self::KeyGeneration { context, message },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidInput { message, .. } => Self::InvalidInput { context, message },
            Self::Domain { .. } => Self::Domain { context },
            Self::DecodingFailure {
                expected, located, ..
            } => Self::DecodingFailure {
                context,
                expected,
                located,
            },
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
        }
    }

    /// True for the `InvalidInputError` family (wrong length or malformed input)
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidLength { .. } | Self::InvalidInput { .. })
    }
}
