//! Error types for report generation.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Solver error: {0}")]
    Solver(#[from] st_solver::SolverError),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ReportResult<T> = Result<T, ReportError>;
