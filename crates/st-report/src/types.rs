//! Report data types.

use serde::{Deserialize, Serialize};
use st_core::units::as_degc;
use st_solver::{CompositeSlab, SteadySolution, TemperatureProfile};

use crate::error::ReportResult;

/// One profile sample: position from the first face, temperature in °C.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub position_m: f64,
    pub temperature_c: f64,
}

/// Snapshot of a solved slab, in plain SI/°C numbers for export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveReport {
    pub q_w_per_m2: f64,
    pub r_total_m2_k_per_w: f64,
    pub layer_resistances_m2_k_per_w: Vec<f64>,
    pub profile: Vec<ProfileRecord>,
}

impl SolveReport {
    /// Flatten a solution into export records.
    pub fn from_solution(slab: &CompositeSlab, solution: &SteadySolution) -> ReportResult<Self> {
        let profile = TemperatureProfile::new(slab, &solution.interface_temps)?;
        let records = profile
            .points()
            .iter()
            .map(|p| ProfileRecord {
                position_m: p.position.value,
                temperature_c: as_degc(p.temperature),
            })
            .collect();

        Ok(Self {
            q_w_per_m2: solution.flux.value,
            r_total_m2_k_per_w: solution.resistances.total,
            layer_resistances_m2_k_per_w: solution.resistances.per_layer.clone(),
            profile: records,
        })
    }
}
