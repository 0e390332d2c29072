//! Spherical coordinates (r, theta, phi).
//!
//! Volumes: dV = |r+^3 - r-^3| / 3 * |cos(th-) - cos(th+)| * dphi.
//! Polar-angle centroids use the closed form of
//! integral(theta sin(theta)) / integral(sin(theta)) over the cell.

use crate::mesh::Grid;
use crate::types::Axis;

use super::{CoordinateSystem, expand};

/// Spherical geometry (r, theta, phi).
#[derive(Clone, Copy, Debug, Default)]
pub struct Spherical;

/// |cos(th-) - cos(th+)|, the solid-angle differential of a polar cell.
#[inline(always)]
fn dmu(theta_left: f64, theta_right: f64) -> f64 {
    (theta_left.cos() - theta_right.cos()).abs()
}

impl CoordinateSystem for Spherical {
    fn name(&self) -> &'static str {
        "spherical"
    }

    #[inline]
    fn cell_volume(&self, grid: &Grid, k: usize, j: usize, i: usize) -> f64 {
        let [x1, x2, x3] = grid.axes();
        let (rm, rp) = (x1.xl[i], x1.xr[i]);
        let dvr = (rp * rp * rp - rm * rm * rm).abs() / 3.0;
        expand(grid.dimensions(), dvr, dmu(x2.xl[j], x2.xr[j]), x3.dx[k])
    }

    #[inline]
    fn face_area(&self, grid: &Grid, dir: Axis, k: usize, j: usize, i: usize) -> f64 {
        let [x1, x2, x3] = grid.axes();
        let d = grid.dimensions();
        match dir {
            Axis::I => {
                // Last face: right face of the last cell
                let r = if i == x1.n_total() {
                    x1.xr[i - 1]
                } else {
                    x1.xl[i]
                };
                expand(d, r * r, dmu(x2.xl[j], x2.xr[j]), x3.dx[k])
            }
            Axis::J => {
                let sin_theta = if j == x2.n_total() {
                    x2.xr[j - 1].sin().abs()
                } else {
                    x2.xl[j].sin().abs()
                };
                expand(d, x1.x[i] * x1.dx[i], sin_theta, x3.dx[k])
            }
            Axis::K => expand(d, x1.x[i] * x1.dx[i], x2.dx[j], 1.0),
        }
    }

    fn geometric_center(&self, grid: &Grid, axis: Axis, index: usize) -> f64 {
        let ax = grid.axis(axis);
        match axis {
            Axis::I => {
                let (r, dr) = (ax.x[index], ax.dx[index]);
                r + 2.0 * r * dr * dr / (12.0 * r * r + dr * dr)
            }
            Axis::J => {
                let (tl, tr) = (ax.xl[index], ax.xr[index]);
                (tr.sin() - tl.sin() + tl * tl.cos() - tr * tr.cos()) / (tl.cos() - tr.cos())
            }
            Axis::K => ax.x[index],
        }
    }
}

/// Auxiliary 1D arrays used by spherical curvature source terms and
/// time-step estimates.
#[derive(Clone, Debug, PartialEq)]
pub struct SphericalFactors {
    /// Radius weighted by r^2: (r+^3 - r-^3) / (r+^2 - r-^2) / 1.5, per x1 cell
    pub rt: Vec<f64>,
    /// |sin(th-)| at the left polar face, per x2 cell
    pub sm: Vec<f64>,
    /// |sin(th)| at the cell centre, per x2 cell
    pub s: Vec<f64>,
    /// |cos(th-) - cos(th+)|, per x2 cell
    pub dmu: Vec<f64>,
}

impl SphericalFactors {
    /// Compute the auxiliary arrays for a spherical grid.
    pub fn compute(grid: &Grid) -> Self {
        let x1 = grid.axis(Axis::I);
        let x2 = grid.axis(Axis::J);

        let rt = x1
            .xl
            .iter()
            .zip(&x1.xr)
            .map(|(&rm, &rp)| (rp * rp * rp - rm * rm * rm) / (rp * rp - rm * rm) / 1.5)
            .collect();

        let sm = x2.xl.iter().map(|t| t.sin().abs()).collect();
        let s = x2.x.iter().map(|t| t.sin().abs()).collect();
        let dmu = x2
            .xl
            .iter()
            .zip(&x2.xr)
            .map(|(&tl, &tr)| dmu(tl, tr))
            .collect();

        Self { rt, sm, s, dmu }
    }
}
