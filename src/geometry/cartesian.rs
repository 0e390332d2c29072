//! Cartesian coordinates (x, y, z).

use crate::mesh::Grid;
use crate::types::Axis;

use super::{CoordinateSystem, expand};

/// Cartesian geometry: volumes and areas are products of spacings.
#[derive(Clone, Copy, Debug, Default)]
pub struct Cartesian;

impl CoordinateSystem for Cartesian {
    fn name(&self) -> &'static str {
        "cartesian"
    }

    #[inline]
    fn cell_volume(&self, grid: &Grid, k: usize, j: usize, i: usize) -> f64 {
        let [x1, x2, x3] = grid.axes();
        expand(grid.dimensions(), x1.dx[i], x2.dx[j], x3.dx[k])
    }

    #[inline]
    fn face_area(&self, grid: &Grid, dir: Axis, k: usize, j: usize, i: usize) -> f64 {
        let [x1, x2, x3] = grid.axes();
        let d = grid.dimensions();
        match dir {
            Axis::I => expand(d, 1.0, x2.dx[j], x3.dx[k]),
            Axis::J => expand(d, x1.dx[i], 1.0, x3.dx[k]),
            Axis::K => expand(d, x1.dx[i], x2.dx[j], 1.0),
        }
    }
}
