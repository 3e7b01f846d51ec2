//! Validation utilities for point arithmetic preconditions

use super::{Error, Result};

/// Validate an argument condition
#[inline(always)]
pub fn argument(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidArgument { name, reason });
    }
    Ok(())
}

/// Validate a point representation invariant
#[inline(always)]
pub fn point_state(condition: bool, context: &'static str, details: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidPointState { context, details });
    }
    Ok(())
}
