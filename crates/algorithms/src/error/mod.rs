//! Error handling for the algebraic and coding primitives

use core::fmt;

use mecs_api::Error as CoreError;

/// The error type for primitive operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length (bits, bytes or elements, per context)
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Malformed input of the right length
    InvalidInput {
        /// Context where the input was rejected
        context: &'static str,
        /// What was wrong with it
        reason: &'static str,
    },

    /// Undefined operation such as inverting zero
    Domain {
        /// Operation that was attempted
        operation: &'static str,
    },

    /// Gaussian elimination found no pivot for a leading column
    RankDeficient {
        /// Column without a pivot
        column: usize,
    },

    /// A bounded retry loop ran out of attempts
    RetryLimit {
        /// Operation that was retried
        operation: &'static str,
        /// Number of attempts made
        attempts: usize,
    },

    /// Decoder located a number of errors other than the design weight
    DecodingFailure {
        /// Design error weight `t`
        expected: usize,
        /// Number of error positions actually located
        located: usize,
    },
}

// Add convenience helpers
impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }

    /// Shorthand to create a Domain error
    pub fn domain(operation: &'static str) -> Self {
        Error::Domain { operation }
    }
}

/// Result type for primitive operations
pub type Result<T> = core::result::Result<T, Error>;

// Display implementation for error formatting
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::InvalidInput { context, reason } => {
                write!(f, "Invalid input for {}: {}", context, reason)
            }
            Error::Domain { operation } => write!(f, "Undefined operation: {}", operation),
            Error::RankDeficient { column } => {
                write!(f, "Matrix is rank deficient: no pivot in column {}", column)
            }
            Error::RetryLimit {
                operation,
                attempts,
            } => {
                write!(f, "{} gave up after {} attempts", operation, attempts)
            }
            Error::DecodingFailure { expected, located } => {
                write!(
                    f,
                    "Decoding failure: expected {} errors, located {}",
                    expected, located
                )
            }
        }
    }
}

impl std::error::Error for Error {}

// Implement conversion to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::UnsupportedParameter {
                context: name,
                message: reason.to_string(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::InvalidInput { context, reason } => CoreError::InvalidInput {
                context,
                message: reason.to_string(),
            },
            Error::Domain { operation } => CoreError::Domain { context: operation },
            Error::RankDeficient { column } => CoreError::KeyGeneration {
                context: "systematic form",
                message: format!("no pivot in column {}", column),
            },
            Error::RetryLimit {
                operation,
                attempts,
            } => CoreError::KeyGeneration {
                context: operation,
                message: format!("gave up after {} attempts", attempts),
            },
            Error::DecodingFailure { expected, located } => CoreError::DecodingFailure {
                context: "Goppa decoder",
                expected,
                located,
            },
        }
    }
}

// Include the validation submodule
pub mod validate;

#[cfg(test)]
mod tests;
