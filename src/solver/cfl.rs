//! Time-step constraint from the face wave speeds.

use crate::field::Array3;
use crate::geometry::Geometry;
use crate::mesh::Grid;
use crate::types::{Axis, IndexRange3D};

use super::SweepOutput;

/// Physical length of cell (k, j, i) along `dir`.
///
/// Angular directions are scaled by the radius (and by sin(theta) for the
/// spherical azimuth).
#[inline]
pub fn cell_length(
    grid: &Grid,
    geometry: Geometry,
    dir: Axis,
    k: usize,
    j: usize,
    i: usize,
) -> f64 {
    let [x1, x2, x3] = grid.axes();
    match (dir, geometry) {
        (Axis::I, _) => x1.dx[i],
        (Axis::J, Geometry::Polar | Geometry::Spherical) => x1.x[i].abs() * x2.dx[j],
        (Axis::J, _) => x2.dx[j],
        (Axis::K, Geometry::Spherical) => x1.x[i].abs() * x2.x[j].sin().abs() * x3.dx[k],
        (Axis::K, _) => x3.dx[k],
    }
}

/// Add `max(cmax(lo face), cmax(hi face)) / dl` of one sweep to `inv_dt`.
pub fn accumulate_inverse_dt(
    inv_dt: &mut Array3,
    sweep: &SweepOutput,
    grid: &Grid,
    geometry: Geometry,
    cells: &IndexRange3D,
) {
    let dir = sweep.direction;
    for (k, j, i) in cells.iter() {
        let (kp, jp, ip) = match dir {
            Axis::I => (k, j, i + 1),
            Axis::J => (k, j + 1, i),
            Axis::K => (k + 1, j, i),
        };
        let c_lo = sweep.cmax.get(k, j, i);
        let c_hi = sweep.cmax.get(kp, jp, ip);
        let c = crate::flux::nan_max(c_lo, c_hi);
        inv_dt[(k, j, i)] += c / cell_length(grid, geometry, dir, k, j, i);
    }
}

/// Stable time step `cfl / max(inv_dt)` over `cells`.
///
/// Returns infinity when nothing moves, NaN if any wave speed was NaN.
pub fn compute_dt(inv_dt: &Array3, cells: &IndexRange3D, cfl: f64) -> f64 {
    let max_inv = inv_dt.max_over(cells);
    if max_inv == 0.0 {
        return f64::INFINITY;
    }
    cfl / max_inv
}
