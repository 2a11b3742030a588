//! Constant-time byte comparison.

use subtle::ConstantTimeEq;

use crate::errors::{CryptkitError, Result};

/// Compare two equal-length buffers in time independent of where they
/// differ.
///
/// Buffers of different lengths are an error rather than `false`; the
/// length itself is not secret, but callers are expected to have
/// validated it already.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> Result<bool> {
    if a.len() != b.len() {
        return Err(CryptkitError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    Ok(a.ct_eq(b).into())
}
