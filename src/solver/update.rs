//! Conservative update from interface fluxes.
//!
//! dU/dt = -(A(f+1) F(f+1) - A(f) F(f)) / dV, summed over sweep directions.

use crate::field::Array4;
use crate::geometry::GeometricFactors;
use crate::types::{Axis, IndexRange3D};

use super::SweepOutput;

/// Subtract the flux divergence of one sweep from `rhs` on the cells of
/// `cells`.
///
/// `rhs` holds conserved-variable tendencies and has the cell extents;
/// `sweep` must cover the faces bounding `cells`.
pub fn accumulate_flux_divergence(
    rhs: &mut Array4,
    sweep: &SweepOutput,
    factors: &GeometricFactors,
    cells: &IndexRange3D,
) {
    let dir = sweep.direction;
    let area = factors.areas(dir);
    let nvar = rhs.nvar().min(sweep.flux.nvar());

    for (k, j, i) in cells.iter() {
        let (kp, jp, ip) = match dir {
            Axis::I => (k, j, i + 1),
            Axis::J => (k, j + 1, i),
            Axis::K => (k + 1, j, i),
        };
        let a_lo = area.get(k, j, i);
        let a_hi = area.get(kp, jp, ip);
        let inv_dv = 1.0 / factors.volume(k, j, i);

        for nv in 0..nvar {
            let div = a_hi * sweep.flux.get(nv, kp, jp, ip) - a_lo * sweep.flux.get(nv, k, j, i);
            rhs[(nv, k, j, i)] -= div * inv_dv;
        }
    }
}
