//! Per-layer area-normalized resistances and their sum.

use crate::common::check_finite;
use crate::error::SolverResult;
use crate::layer::CompositeSlab;
use st_core::numeric::Real;

/// Series resistance breakdown of a slab.
///
/// `total` is the sum of `per_layer` by construction (additivity of series
/// resistances); both are in m²·K/W.
#[derive(Debug, Clone, PartialEq)]
pub struct ResistanceBreakdown {
    pub per_layer: Vec<Real>,
    pub total: Real,
}

impl ResistanceBreakdown {
    /// Compute L/k for every layer of a validated slab.
    pub fn of(slab: &CompositeSlab) -> SolverResult<Self> {
        let mut per_layer = Vec::with_capacity(slab.len());
        for layer in slab.layers() {
            let r = layer.area_resistance();
            check_finite(r, "layer resistance")?;
            per_layer.push(r);
        }
        let total: Real = per_layer.iter().sum();
        check_finite(total, "total resistance")?;
        Ok(Self { per_layer, total })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use st_core::numeric::{Tolerances, nearly_equal};

    #[test]
    fn brick_wall_breakdown() {
        let slab = CompositeSlab::from_si_arrays(&[0.07, 0.7, 0.07], &[0.03, 0.1, 0.03]).unwrap();
        let breakdown = ResistanceBreakdown::of(&slab).unwrap();

        let tol = Tolerances {
            abs: 1e-4,
            rel: 1e-4,
        };
        let expected = [0.42857, 0.14286, 0.42857];
        assert_eq!(breakdown.per_layer.len(), expected.len());
        for (got, want) in breakdown.per_layer.iter().zip(expected) {
            assert!(nearly_equal(*got, want, tol), "got {got}, want {want}");
        }
        assert!(nearly_equal(breakdown.total, 1.0, tol));
    }

    #[test]
    fn total_is_sum_of_per_layer() {
        let slab = CompositeSlab::from_si_arrays(&[1.3, 0.04, 0.6], &[0.2, 0.08, 0.012]).unwrap();
        let breakdown = ResistanceBreakdown::of(&slab).unwrap();
        let sum: Real = breakdown.per_layer.iter().sum();
        assert!(nearly_equal(breakdown.total, sum, Tolerances::default()));
    }
}
