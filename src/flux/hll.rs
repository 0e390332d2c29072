//! HLL (Harten-Lax-van Leer) approximate Riemann solver.
//!
//! The HLL solver uses a two-wave approximation to the Riemann problem:
//!
//! F* = (s_r F_l - s_l F_r + s_l s_r (U_r - U_l)) / (s_r - s_l)
//!
//! with Davis estimates s_l = min(vn_l - c_l, vn_r - c_r) and
//! s_r = max(vn_l + c_l, vn_r + c_r).
//!
//! Reference: Toro, "Riemann Solvers and Numerical Methods for Fluid Dynamics"

use crate::equations::{MAX_VARS, Physics, StateVector};
use crate::types::SweepAxes;

use super::{FaceFlux, nan_max, nan_min};

/// HLL numerical flux for any [`Physics`].
///
/// Reports `max(|s_l|, |s_r|)` as the face wave speed.
#[inline]
pub fn hll_flux<P: Physics>(
    physics: &P,
    left: &StateVector,
    right: &StateVector,
    axes: SweepAxes,
) -> FaceFlux {
    let nvar = physics.nvar();
    let ivn = physics.layout().vx(axes.normal);

    let u_l = physics.prim_to_cons(left);
    let u_r = physics.prim_to_cons(right);
    let f_l = physics.flux(left, &u_l, axes);
    let f_r = physics.flux(right, &u_r, axes);

    let c_l = physics.signal_speed(left, axes.normal);
    let c_r = physics.signal_speed(right, axes.normal);

    let s_l = nan_min(left[ivn] - c_l, right[ivn] - c_r);
    let s_r = nan_max(left[ivn] + c_l, right[ivn] + c_r);
    let cmax = nan_max(s_l.abs(), s_r.abs());

    let mut flux = [0.0; MAX_VARS];
    if s_l >= 0.0 {
        flux[..nvar].copy_from_slice(&f_l[..nvar]);
    } else if s_r <= 0.0 {
        flux[..nvar].copy_from_slice(&f_r[..nvar]);
    } else {
        let inv = 1.0 / (s_r - s_l);
        for nv in 0..nvar {
            flux[nv] = (s_r * f_l[nv] - s_l * f_r[nv] + s_l * s_r * (u_r[nv] - u_l[nv])) * inv;
        }
    }

    FaceFlux { flux, cmax }
}
