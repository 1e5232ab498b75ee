//! Validation utilities for cryptosystem inputs

use super::types::{Error, Result};

/// Check a parameter condition, failing with `UnsupportedParameter`
pub fn parameter(condition: bool, context: &'static str, reason: &str) -> Result<()> {
    if !condition {
        return Err(Error::UnsupportedParameter {
            context,
            message: reason.to_string(),
        });
    }
    Ok(())
}

/// Validate an exact length
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a minimum length
pub fn min_length(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual < min {
        return Err(Error::InvalidLength {
            context,
            expected: min,
            actual,
        });
    }
    Ok(())
}

/// Check a key-format condition, failing with `InvalidKey`
pub fn key(condition: bool, context: &'static str, reason: &str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidKey {
            context,
            message: reason.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_checks() {
        assert!(length("pt", 8, 8).is_ok());
        assert_eq!(
            length("pt", 7, 8),
            Err(Error::InvalidLength {
                context: "pt",
                expected: 8,
                actual: 7
            })
        );
        assert!(min_length("key", 10, 4).is_ok());
        assert!(min_length("key", 3, 4).is_err());
    }

    #[test]
    fn test_parameter_and_key_checks() {
        assert!(parameter(true, "m", "unused").is_ok());
        match parameter(false, "m", "no field polynomial") {
            Err(Error::UnsupportedParameter { context, message }) => {
                assert_eq!(context, "m");
                assert_eq!(message, "no field polynomial");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(matches!(
            key(false, "sk", "bad version"),
            Err(Error::InvalidKey { .. })
        ));
    }
}
