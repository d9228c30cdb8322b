//! Error types for slab construction and solving.

use st_core::error::StError;
use thiserror::Error;

/// Errors that can occur while building a slab or solving it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("No layers supplied")]
    EmptyLayers,

    #[error("Invalid layer {index}: {what}")]
    InvalidLayer { index: usize, what: &'static str },

    #[error(
        "Mismatched inputs: {conductivities} conductivities vs {thicknesses} thicknesses"
    )]
    LengthMismatch {
        conductivities: usize,
        thicknesses: usize,
    },

    #[error("Non-positive total resistance: {r_total} m²·K/W")]
    InvalidResistance { r_total: f64 },

    #[error("Non-finite value: {what}")]
    NonFinite { what: &'static str },

    #[error("Problem setup error: {what}")]
    ProblemSetup { what: String },
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<SolverError> for StError {
    fn from(e: SolverError) -> Self {
        match e {
            SolverError::EmptyLayers => StError::InvalidArg { what: "no layers" },
            SolverError::InvalidLayer { index: _, what } => StError::InvalidArg { what },
            SolverError::LengthMismatch { .. } => StError::InvalidArg {
                what: "mismatched layer inputs",
            },
            SolverError::InvalidResistance { r_total } => StError::NonFinite {
                what: "total resistance",
                value: r_total,
            },
            SolverError::NonFinite { what } => StError::InvalidArg { what },
            SolverError::ProblemSetup { what: _ } => StError::InvalidArg {
                what: "problem setup",
            },
        }
    }
}
