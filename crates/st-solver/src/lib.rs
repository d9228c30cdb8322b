//! Steady-state conduction solver for 1-D composite slabs.
//!
//! This crate models a stack of material layers in series, converts each
//! layer into an area-normalized thermal resistance, and solves for the heat
//! flux and the temperature at every layer interface given the two boundary
//! face temperatures. Everything is a pure function over a validated slab;
//! there is no internal state.

pub mod common;
pub mod error;
pub mod layer;
pub mod profile;
pub mod resistance;
pub mod steady;

pub use error::{SolverError, SolverResult};
pub use layer::{CompositeSlab, Layer};
pub use profile::{ProfilePoint, TemperatureProfile};
pub use resistance::ResistanceBreakdown;
pub use steady::{BoundaryTemperatures, SteadySolution, march_backward, march_forward, solve};
