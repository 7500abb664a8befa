//! Validation utilities for hash state and parameters

use super::{Error, Result};

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

/// Validate that a hasher has not yet produced its digest
#[inline(always)]
pub fn not_finalized(finalized: bool, algorithm: &'static str) -> Result<()> {
    if finalized {
        return Err(Error::AlreadyFinalized { algorithm });
    }
    Ok(())
}
