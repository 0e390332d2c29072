//! Grid paired with its geometric factors.

use crate::geometry::{GeometricFactors, Geometry};

use super::Grid;

/// A grid, its coordinate system and the derived geometric arrays.
///
/// The factors are computed on construction and recomputed in full by
/// [`Domain::rebuild`]; they are never mutated piecewise.
#[derive(Clone, Debug)]
pub struct Domain {
    grid: Grid,
    geometry: Geometry,
    factors: GeometricFactors,
}

impl Domain {
    /// Build the domain and compute its geometric factors.
    pub fn new(grid: Grid, geometry: Geometry) -> Self {
        let factors = GeometricFactors::compute(&grid, geometry);
        log::info!(
            "Domain: {}D {} grid, extents {:?}, {} interior cells",
            grid.dimensions(),
            geometry,
            grid.extents(),
            grid.n_interior_cells()
        );
        Self {
            grid,
            geometry,
            factors,
        }
    }

    /// Replace the grid and recompute every geometric array.
    pub fn rebuild(&mut self, grid: Grid) {
        *self = Self::new(grid, self.geometry);
    }

    /// The grid.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Coordinate system.
    #[inline]
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Geometric factors of the current grid.
    #[inline]
    pub fn factors(&self) -> &GeometricFactors {
        &self.factors
    }
}
