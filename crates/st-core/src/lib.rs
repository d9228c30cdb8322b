//! st-core: stable foundation for slabtherm.
//!
//! Contains:
//! - units (uom SI types + constructors for conduction quantities)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{StError, StResult};
pub use numeric::*;
pub use units::*;
