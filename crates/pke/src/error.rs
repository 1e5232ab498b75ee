//! Error handling for PKE operations.

use core::fmt;

use mecs_algorithms::error::Error as PrimitiveError;
use mecs_api::error::Error as CoreError;

/// Error type for PKE operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Failure inside a field, matrix or decoding primitive
    Primitive(PrimitiveError),
    /// Failure reported by the API layer (parameter or length validation)
    Api(CoreError),
    /// Key generation gave up
    KeyGeneration(&'static str),
    /// A serialized key failed validation
    InvalidKeyFormat(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "PKE primitive error: {}", e),
            Error::Api(e) => write!(f, "PKE API error: {}", e),
            Error::KeyGeneration(reason) => write!(f, "McEliece key generation failed: {}", reason),
            Error::InvalidKeyFormat(reason) => write!(f, "Invalid McEliece key format: {}", reason),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            Error::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        Error::Api(err)
    }
}

// Conversion from PKE Error to API Error
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::Api(e) => e,
            Error::KeyGeneration(reason) => CoreError::KeyGeneration {
                context: "McEliece key generation",
                message: reason.to_string(),
            },
            Error::InvalidKeyFormat(reason) => CoreError::InvalidKey {
                context: "McEliece key",
                message: reason.to_string(),
            },
        }
    }
}

/// Result type for PKE operations.
pub type Result<T> = core::result::Result<T, Error>;
