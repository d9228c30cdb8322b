//! Temperature-vs-position profile across the slab.

use crate::error::{SolverError, SolverResult};
use crate::layer::CompositeSlab;
use st_core::units::{Length, Temperature, m};

/// One interface of the slab: cumulative position from the first face, and
/// the temperature there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfilePoint {
    pub position: Length,
    pub temperature: Temperature,
}

/// Ordered profile points, one per interface including both boundaries.
///
/// Positions are strictly increasing, start at zero, and end at the slab's
/// total thickness.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureProfile {
    points: Vec<ProfilePoint>,
}

impl TemperatureProfile {
    /// Pair interface temperatures with cumulative layer positions.
    ///
    /// `interface_temps` must have exactly layers + 1 entries.
    pub fn new(slab: &CompositeSlab, interface_temps: &[Temperature]) -> SolverResult<Self> {
        if interface_temps.len() != slab.len() + 1 {
            return Err(SolverError::ProblemSetup {
                what: format!(
                    "expected {} interface temperatures, got {}",
                    slab.len() + 1,
                    interface_temps.len()
                ),
            });
        }

        let mut points = Vec::with_capacity(interface_temps.len());
        let mut x = 0.0;
        points.push(ProfilePoint {
            position: m(0.0),
            temperature: interface_temps[0],
        });
        for (layer, &t) in slab.layers().iter().zip(&interface_temps[1..]) {
            x += layer.thickness.value;
            points.push(ProfilePoint {
                position: m(x),
                temperature: t,
            });
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[ProfilePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Position of the last interface, i.e. the slab's total thickness.
    pub fn span(&self) -> Length {
        self.points
            .last()
            .map(|p| p.position)
            .unwrap_or_else(|| m(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steady::{BoundaryTemperatures, solve};
    use st_core::numeric::{Tolerances, nearly_equal};
    use st_core::units::degc;

    #[test]
    fn positions_accumulate_layer_thicknesses() {
        let slab = CompositeSlab::from_si_arrays(&[0.07, 0.7, 0.07], &[0.03, 0.1, 0.03]).unwrap();
        let bounds = BoundaryTemperatures::new(degc(150.0), degc(10.0)).unwrap();
        let solution = solve(&slab, bounds).unwrap();
        let profile = TemperatureProfile::new(&slab, &solution.interface_temps).unwrap();

        let tol = Tolerances::default();
        let positions: Vec<f64> = profile.points().iter().map(|p| p.position.value).collect();
        assert_eq!(positions.len(), 4);
        assert!(nearly_equal(positions[0], 0.0, tol));
        assert!(nearly_equal(positions[1], 0.03, tol));
        assert!(nearly_equal(positions[2], 0.13, tol));
        assert!(nearly_equal(positions[3], 0.16, tol));
        assert!(nearly_equal(profile.span().value, 0.16, tol));
    }

    #[test]
    fn single_layer_profile_has_two_points() {
        let slab = CompositeSlab::from_si_arrays(&[0.7], &[0.1]).unwrap();
        let bounds = BoundaryTemperatures::new(degc(40.0), degc(20.0)).unwrap();
        let solution = solve(&slab, bounds).unwrap();
        let profile = TemperatureProfile::new(&slab, &solution.interface_temps).unwrap();

        assert_eq!(profile.len(), 2);
        let tol = Tolerances::default();
        assert!(nearly_equal(profile.points()[0].position.value, 0.0, tol));
        assert!(nearly_equal(profile.points()[1].position.value, 0.1, tol));
    }

    #[test]
    fn temp_count_mismatch_is_rejected() {
        let slab = CompositeSlab::from_si_arrays(&[0.7], &[0.1]).unwrap();
        let err = TemperatureProfile::new(&slab, &[degc(40.0)]).unwrap_err();
        assert!(matches!(err, SolverError::ProblemSetup { .. }));
    }
}
