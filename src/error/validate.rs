//! Validation utilities for field parameters

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate that a polynomial degree is strictly below a bound
#[inline(always)]
pub fn degree(context: &'static str, degree: usize, limit: usize) -> Result<()> {
    if degree >= limit {
        return Err(Error::Degree {
            context,
            degree,
            limit,
        });
    }
    Ok(())
}
