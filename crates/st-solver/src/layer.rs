//! Layer model for a 1-D composite slab.

use crate::error::{SolverError, SolverResult};
use st_core::numeric::{Real, is_positive};
use st_core::units::{Conductivity, Length, m, w_per_m_k};

/// One homogeneous material slab in the stack.
///
/// Immutable once constructed; validation happens when layers are assembled
/// into a [`CompositeSlab`], so a `Layer` on its own carries whatever values
/// it was given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer {
    /// Layer thickness along the conduction axis
    pub thickness: Length,
    /// Thermal conductivity of the material
    pub conductivity: Conductivity,
}

impl Layer {
    pub fn new(thickness: Length, conductivity: Conductivity) -> Self {
        Self {
            thickness,
            conductivity,
        }
    }

    /// Area-normalized thermal resistance, L/k (m²·K/W).
    ///
    /// Only meaningful for a layer that passed slab validation (positive
    /// thickness and conductivity).
    pub fn area_resistance(&self) -> Real {
        self.thickness.value / self.conductivity.value
    }
}

/// Ordered stack of layers; order defines the spatial traversal from the
/// first boundary face to the last.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeSlab {
    layers: Vec<Layer>,
}

impl CompositeSlab {
    /// Build a slab from layers, rejecting empty stacks and non-physical
    /// layer values up front.
    pub fn new(layers: Vec<Layer>) -> SolverResult<Self> {
        if layers.is_empty() {
            return Err(SolverError::EmptyLayers);
        }
        for (index, layer) in layers.iter().enumerate() {
            if !is_positive(layer.thickness.value) {
                return Err(SolverError::InvalidLayer {
                    index,
                    what: "non-positive thickness",
                });
            }
            if !is_positive(layer.conductivity.value) {
                return Err(SolverError::InvalidLayer {
                    index,
                    what: "non-positive conductivity",
                });
            }
        }
        Ok(Self { layers })
    }

    /// Build from parallel SI arrays: conductivities in W/(m·K), thicknesses
    /// in meters. This is the surface that can observe a length mismatch.
    pub fn from_si_arrays(conductivities: &[Real], thicknesses: &[Real]) -> SolverResult<Self> {
        if conductivities.len() != thicknesses.len() {
            return Err(SolverError::LengthMismatch {
                conductivities: conductivities.len(),
                thicknesses: thicknesses.len(),
            });
        }
        let layers = conductivities
            .iter()
            .zip(thicknesses)
            .map(|(&kc, &l)| Layer::new(m(l), w_per_m_k(kc)))
            .collect();
        Self::new(layers)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn total_thickness(&self) -> Length {
        m(self.layers.iter().map(|l| l.thickness.value).sum())
    }
}
