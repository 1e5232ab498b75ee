//! Validation utilities for primitive operations

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that an index lies below a bound
#[inline(always)]
pub fn index(context: &'static str, index: usize, bound: usize) -> Result<()> {
    if index >= bound {
        return Err(Error::InvalidInput {
            context,
            reason: "index out of range",
        });
    }
    Ok(())
}
