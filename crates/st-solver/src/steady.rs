//! Steady-state flux and interface temperature solver.

use crate::common::check_finite;
use crate::error::{SolverError, SolverResult};
use crate::layer::CompositeSlab;
use crate::resistance::ResistanceBreakdown;
use st_core::numeric::Real;
use st_core::units::{HeatFlux, Temperature, dt_k, w_per_m2};

/// Temperatures imposed at the two outer faces of the slab.
///
/// `first` is the face at position zero. Reversed ordering is allowed and
/// simply yields a negative flux.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryTemperatures {
    pub first: Temperature,
    pub last: Temperature,
}

impl BoundaryTemperatures {
    pub fn new(first: Temperature, last: Temperature) -> SolverResult<Self> {
        check_finite(first.value, "first boundary temperature")?;
        check_finite(last.value, "last boundary temperature")?;
        Ok(Self { first, last })
    }
}

/// Solution of a steady conduction problem.
#[derive(Debug, Clone)]
pub struct SteadySolution {
    /// Heat flux through the slab (W/m²); positive means first face → last face
    pub flux: HeatFlux,
    /// Temperature at every interface, boundaries included (layers + 1 entries)
    pub interface_temps: Vec<Temperature>,
    /// Resistance breakdown the flux was derived from
    pub resistances: ResistanceBreakdown,
}

/// Solve a validated slab for flux and interface temperatures.
///
/// Under steady state with no internal generation the flux is uniform, so
/// each interface temperature follows from the previous one and that layer's
/// resistance alone.
pub fn solve(slab: &CompositeSlab, bounds: BoundaryTemperatures) -> SolverResult<SteadySolution> {
    let resistances = ResistanceBreakdown::of(slab)?;
    if resistances.total <= 0.0 {
        return Err(SolverError::InvalidResistance {
            r_total: resistances.total,
        });
    }

    let dt = dt_k(bounds.first.value - bounds.last.value);
    let q = dt.value / resistances.total;
    check_finite(q, "heat flux")?;

    tracing::debug!(
        layers = slab.len(),
        r_total = resistances.total,
        q_w_per_m2 = q,
        "steady conduction solve"
    );

    let interface_temps = march_forward(bounds.first, q, &resistances.per_layer);

    Ok(SteadySolution {
        flux: w_per_m2(q),
        interface_temps,
        resistances,
    })
}

/// Interface temperatures marched from the first boundary:
/// `T_next = T_current - q * R_layer`, layer by layer in order.
///
/// Returns layers + 1 temperatures, the first being `t_first` itself.
pub fn march_forward(t_first: Temperature, q: Real, per_layer: &[Real]) -> Vec<Temperature> {
    let mut temps = Vec::with_capacity(per_layer.len() + 1);
    let mut t = t_first;
    temps.push(t);
    for &r in per_layer {
        t = t - dt_k(q * r);
        temps.push(t);
    }
    temps
}

/// Interface temperatures marched from the last boundary:
/// `T_prev = T_next + q * R_layer`, in reverse layer order.
///
/// Must agree with [`march_forward`] within floating-point tolerance for any
/// valid input; kept public so callers can cross-check a solution.
pub fn march_backward(t_last: Temperature, q: Real, per_layer: &[Real]) -> Vec<Temperature> {
    let mut temps = Vec::with_capacity(per_layer.len() + 1);
    let mut t = t_last;
    temps.push(t);
    for &r in per_layer.iter().rev() {
        t = t + dt_k(q * r);
        temps.push(t);
    }
    temps.reverse();
    temps
}
