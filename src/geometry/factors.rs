//! Geometric factors of a whole grid.
//!
//! Computed once per grid by [`GeometricFactors::compute`] and read-only
//! afterwards. A new grid means a new set of factors.

use crate::field::Array3;
use crate::mesh::Grid;
use crate::types::Axis;

use super::{Geometry, SphericalFactors};

/// Cell volumes, face areas and geometric centres of a grid.
///
/// All arrays use total (ghost-included) indices. `face_area[d]` is one
/// point larger than the cell arrays along axis `d`.
#[derive(Clone, Debug)]
pub struct GeometricFactors {
    /// Coordinate system the factors were computed for
    pub geometry: Geometry,

    /// Cell volumes dV(k, j, i)
    pub cell_volume: Array3,

    /// Face areas per direction, `face_area[dir.index()]`
    pub face_area: [Array3; 3],

    /// Centroid positions per axis
    pub geometric_center: [Vec<f64>; 3],

    /// Auxiliary arrays, spherical geometry only
    pub spherical: Option<SphericalFactors>,
}

impl GeometricFactors {
    /// Compute every geometric array of `grid` in the given geometry.
    pub fn compute(grid: &Grid, geometry: Geometry) -> Self {
        let cs = geometry.coordinate_system();
        let extents = grid.extents();

        let cell_volume = Array3::from_fn(extents, |k, j, i| cs.cell_volume(grid, k, j, i));

        let face_area = Axis::ALL.map(|dir| {
            Array3::from_fn(extents.with_faces(dir), |k, j, i| {
                cs.face_area(grid, dir, k, j, i)
            })
        });

        let geometric_center = Axis::ALL.map(|axis| {
            (0..grid.axis(axis).n_total())
                .map(|index| cs.geometric_center(grid, axis, index))
                .collect()
        });

        let spherical =
            matches!(geometry, Geometry::Spherical).then(|| SphericalFactors::compute(grid));

        let factors = Self {
            geometry,
            cell_volume,
            face_area,
            geometric_center,
            spherical,
        };

        log::debug!(
            "Geometric factors: geometry={}, extents={:?}, interior volume={:.6e}",
            geometry,
            extents,
            factors.total_volume(grid)
        );

        factors
    }

    /// Volume of cell (k, j, i).
    #[inline(always)]
    pub fn volume(&self, k: usize, j: usize, i: usize) -> f64 {
        self.cell_volume.get(k, j, i)
    }

    /// Area of face (k, j, i) normal to `dir`.
    #[inline(always)]
    pub fn area(&self, dir: Axis, k: usize, j: usize, i: usize) -> f64 {
        self.face_area[dir.index()].get(k, j, i)
    }

    /// Face areas normal to `dir`.
    #[inline]
    pub fn areas(&self, dir: Axis) -> &Array3 {
        &self.face_area[dir.index()]
    }

    /// Summed volume of the interior cells.
    pub fn total_volume(&self, grid: &Grid) -> f64 {
        self.cell_volume.sum_over(&grid.interior())
    }
}
