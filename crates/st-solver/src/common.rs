//! Shared helpers for solver calculations.

use crate::error::{SolverError, SolverResult};
use st_core::numeric::ensure_finite;

/// Ensure a value is finite, returning SolverError if not.
pub fn check_finite(value: f64, what: &'static str) -> SolverResult<()> {
    ensure_finite(value, what).map_err(|_| SolverError::NonFinite { what })?;
    Ok(())
}
