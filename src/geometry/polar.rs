//! Polar coordinates (R, phi, z).
//!
//! Same radial factors as the cylindrical grid, with an explicit azimuthal
//! spacing instead of a collapsed unit factor.

use crate::mesh::Grid;
use crate::types::Axis;

use super::cylindrical::{radial_center, radial_face_radius, radial_volume};
use super::{CoordinateSystem, expand};

/// Polar geometry (R, phi, z).
#[derive(Clone, Copy, Debug, Default)]
pub struct Polar;

impl CoordinateSystem for Polar {
    fn name(&self) -> &'static str {
        "polar"
    }

    #[inline]
    fn cell_volume(&self, grid: &Grid, k: usize, j: usize, i: usize) -> f64 {
        let [x1, x2, x3] = grid.axes();
        let dvr = radial_volume(x1.xl[i], x1.xr[i]);
        expand(grid.dimensions(), dvr, x2.dx[j], x3.dx[k])
    }

    #[inline]
    fn face_area(&self, grid: &Grid, dir: Axis, k: usize, j: usize, i: usize) -> f64 {
        let [x1, x2, x3] = grid.axes();
        let d = grid.dimensions();
        match dir {
            Axis::I => expand(d, radial_face_radius(grid, i).abs(), x2.dx[j], x3.dx[k]),
            Axis::J => expand(d, x1.dx[i], 1.0, x3.dx[k]),
            Axis::K => expand(d, x1.x[i] * x1.dx[i], x2.dx[j], 1.0),
        }
    }

    fn geometric_center(&self, grid: &Grid, axis: Axis, index: usize) -> f64 {
        let ax = grid.axis(axis);
        match axis {
            Axis::I => radial_center(ax.x[index], ax.dx[index]),
            _ => ax.x[index],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::GridAxis;
    use std::f64::consts::PI;

    const TOL: f64 = 1e-13;

    fn grid_polar() -> Grid {
        Grid::three_d(
            GridAxis::uniform(0.5, 1.5, 4, 2).unwrap(),
            GridAxis::uniform(0.0, PI / 2.0, 4, 2).unwrap(),
            GridAxis::uniform(0.0, 1.0, 2, 2).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_volume_sector() {
        let grid = grid_polar();
        let [x1, x2, x3] = grid.axes();
        let (k, j, i) = (2, 3, 4);
        let expected =
            (x1.xr[i].powi(2) - x1.xl[i].powi(2)) / 2.0 * x2.dx[j] * x3.dx[k];
        assert!((Polar.cell_volume(&grid, k, j, i) - expected).abs() < TOL);
    }

    #[test]
    fn test_area_formulas() {
        let grid = grid_polar();
        let [x1, x2, x3] = grid.axes();
        let (k, j, i) = (2, 3, 4);

        let a_r = Polar.face_area(&grid, Axis::I, k, j, i);
        assert!((a_r - x1.xl[i] * x2.dx[j] * x3.dx[k]).abs() < TOL);

        let a_phi = Polar.face_area(&grid, Axis::J, k, j, i);
        assert!((a_phi - x1.dx[i] * x3.dx[k]).abs() < TOL);

        let a_z = Polar.face_area(&grid, Axis::K, k, j, i);
        assert!((a_z - x1.x[i] * x1.dx[i] * x2.dx[j]).abs() < TOL);
    }

    #[test]
    fn test_radial_center_matches_cylindrical() {
        let grid = grid_polar();
        let x1 = grid.axis(Axis::I);
        let xc = Polar.geometric_center(&grid, Axis::I, 3);
        assert!((xc - (x1.x[3] + x1.dx[3].powi(2) / (12.0 * x1.x[3]))).abs() < TOL);
        assert_eq!(Polar.geometric_center(&grid, Axis::J, 3), grid.axis(Axis::J).x[3]);
    }
}
