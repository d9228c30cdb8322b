//! Presentation layer for slab solutions.
//!
//! Turns a solved slab into serializable records and renders them as a text
//! table, CSV, JSON, or a terminal line chart. Nothing here feeds back into
//! the solver; this crate is strictly downstream of st-solver.

pub mod chart;
pub mod error;
pub mod render;
pub mod types;

pub use chart::{ChartConfig, render_chart};
pub use error::{ReportError, ReportResult};
pub use render::{render_table, to_csv, to_json};
pub use types::{ProfileRecord, SolveReport};
