//! Axisymmetric cylindrical coordinates (R, z).
//!
//! The azimuthal direction is collapsed to a unit factor, so volumes and
//! areas are per radian of azimuth.

use crate::mesh::Grid;
use crate::types::Axis;

use super::{CoordinateSystem, expand};

/// Cylindrical geometry (R, z).
#[derive(Clone, Copy, Debug, Default)]
pub struct Cylindrical;

/// |R+^2 - R-^2| / 2, the radial volume factor shared with polar grids.
#[inline(always)]
pub(super) fn radial_volume(r_left: f64, r_right: f64) -> f64 {
    (r_right * r_right - r_left * r_left).abs() / 2.0
}

/// Radius of radial face `i`.
///
/// The last face of the array has no left-face entry and takes the right
/// face of the last cell, so neighbouring subdomains agree on every face.
#[inline(always)]
pub(super) fn radial_face_radius(grid: &Grid, i: usize) -> f64 {
    let x1 = grid.axis(Axis::I);
    if i == x1.n_total() {
        x1.xr[i - 1]
    } else {
        x1.xl[i]
    }
}

/// Volume-weighted radial centre: R + dR^2 / (12 R).
#[inline(always)]
pub(super) fn radial_center(r: f64, dr: f64) -> f64 {
    r + dr * dr / (12.0 * r)
}

impl CoordinateSystem for Cylindrical {
    fn name(&self) -> &'static str {
        "cylindrical"
    }

    #[inline]
    fn cell_volume(&self, grid: &Grid, _k: usize, j: usize, i: usize) -> f64 {
        let x1 = grid.axis(Axis::I);
        let x2 = grid.axis(Axis::J);
        let dvr = radial_volume(x1.xl[i], x1.xr[i]);
        expand(grid.dimensions(), dvr, x2.dx[j], 1.0)
    }

    #[inline]
    fn face_area(&self, grid: &Grid, dir: Axis, _k: usize, j: usize, i: usize) -> f64 {
        let x1 = grid.axis(Axis::I);
        let x2 = grid.axis(Axis::J);
        let d = grid.dimensions();
        match dir {
            Axis::I => expand(d, radial_face_radius(grid, i).abs(), x2.dx[j], 1.0),
            Axis::J => expand(d, x1.x[i].abs(), x1.dx[i], 1.0),
            Axis::K => 1.0,
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
