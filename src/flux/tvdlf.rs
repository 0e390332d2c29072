//! TVD Lax-Friedrichs (Rusanov) flux.
//!
//! The interface state is replaced by the arithmetic mean of the left and
//! right primitive states; a single signal speed computed from that mean
//! bounds every wave:
//!
//! F* = ½ (F(U_l) + F(U_r) - c_max (U_r - U_l)),  c_max = max(|vn + c|, |vn - c|)
//!
//! Evaluating `c` on the mean instead of taking the larger of the two side
//! speeds is cheaper but can underestimate the fastest wave across strong
//! jumps.

use crate::equations::{MAX_VARS, Physics, StateVector};
use crate::types::SweepAxes;

use super::{FaceFlux, nan_max};

/// TVDLF numerical flux for any [`Physics`].
///
/// # Arguments
/// * `physics` - Equation set providing conversion, flux and signal speed
/// * `left` - Primitive state on the left of the face
/// * `right` - Primitive state on the right of the face
/// * `axes` - Normal/tangential mapping of the sweep
///
/// # Returns
/// The interface flux and the wave speed used for the dissipation.
///
/// Unphysical states are not clamped: a NaN signal speed yields a NaN flux.
#[inline]
pub fn tvdlf_flux<P: Physics>(
    physics: &P,
    left: &StateVector,
    right: &StateVector,
    axes: SweepAxes,
) -> FaceFlux {
    let nvar = physics.nvar();

    let mut avg = [0.0; MAX_VARS];
    for nv in 0..nvar {
        avg[nv] = 0.5 * (left[nv] + right[nv]);
    }

    let u_l = physics.prim_to_cons(left);
    let u_r = physics.prim_to_cons(right);
    let f_l = physics.flux(left, &u_l, axes);
    let f_r = physics.flux(right, &u_r, axes);

    let c = physics.signal_speed(&avg, axes.normal);
    let vn = avg[physics.layout().vx(axes.normal)];
    let cmax = nan_max((vn + c).abs(), (vn - c).abs());

    let mut flux = [0.0; MAX_VARS];
    for nv in 0..nvar {
        flux[nv] = 0.5 * (f_l[nv] + f_r[nv] - cmax * (u_r[nv] - u_l[nv]));
    }

    FaceFlux { flux, cmax }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::{Hydro, Mhd};
    use crate::types::Axis;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_equal_states_give_physical_flux() {
        let hydro = Hydro::adiabatic(1.4);
        let state = [1.0, 0.5, -0.25, 0.1, 0.8, 0.0, 0.0, 0.0];
        for dir in Axis::ALL {
            let axes = SweepAxes::for_direction(dir);
            let ff = tvdlf_flux(&hydro, &state, &state, axes);
            let exact = hydro.flux(&state, &hydro.prim_to_cons(&state), axes);
            for nv in 0..hydro.nvar() {
                assert!((ff.flux[nv] - exact[nv]).abs() < TOL);
            }
            let c = (1.4_f64 * 0.8).sqrt();
            let vn = state[hydro.layout().vx(dir)];
            assert!((ff.cmax - (vn.abs() + c)).abs() < TOL);
        }
    }

    #[test]
    fn test_rest_state_scenario() {
        // rho = p = 1, v = 0, gamma = 1.4
        let hydro = Hydro::adiabatic(1.4);
        let state = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0];
        let ff = tvdlf_flux(&hydro, &state, &state, SweepAxes::for_direction(Axis::I));
        assert!((ff.flux[1] - 1.0).abs() < TOL);
        assert_eq!(ff.flux[0], 0.0);
        assert_eq!(ff.flux[4], 0.0);
        assert!((ff.cmax - 1.4_f64.sqrt()).abs() < TOL);
    }

    #[test]
    fn test_wave_speed_uses_averaged_state() {
        // Colliding streams: the mean velocity vanishes, so the wave speed is
        // the mean sound speed even though each side moves at 2c.
        let hydro = Hydro::isothermal(1.0);
        let left = [1.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        let right = [1.0, -2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        let ff = tvdlf_flux(&hydro, &left, &right, SweepAxes::for_direction(Axis::I));

        let per_side = 2.0 + 1.0;
        assert!((ff.cmax - 1.0).abs() < TOL);
        assert!(ff.cmax < per_side);
    }

    #[test]
    fn test_dissipation_weight() {
        // Pure density jump at rest in an isothermal gas
        let hydro = Hydro::isothermal(1.0);
        let left = [2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        let right = [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        let ff = tvdlf_flux(&hydro, &left, &right, SweepAxes::for_direction(Axis::I));
        // F_rho = 0.5 * (0 + 0 - 1 * (1 - 2))
        assert!((ff.flux[0] - 0.5).abs() < TOL);
        // F_mx = 0.5 * (2 + 1)
        assert!((ff.flux[1] - 1.5).abs() < TOL);
    }

    #[test]
    fn test_negative_pressure_propagates_nan() {
        let hydro = Hydro::adiabatic(1.4);
        let left = [1.0, 0.0, 0.0, 0.0, -2.0, 0.0, 0.0, 0.0];
        let right = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0];
        let ff = tvdlf_flux(&hydro, &left, &right, SweepAxes::for_direction(Axis::I));
        assert!(ff.cmax.is_nan());
        assert!(ff.flux[..hydro.nvar()].iter().all(|f| f.is_nan()));
    }

    #[test]
    fn test_mhd_consistency() {
        let mhd = Mhd::adiabatic(5.0 / 3.0);
        let state = [1.0, 0.1, 0.2, 0.3, 0.5, 0.6, 0.7, 1.0];
        let axes = SweepAxes::for_direction(Axis::J);
        let ff = tvdlf_flux(&mhd, &state, &state, axes);
        let exact = mhd.flux(&state, &mhd.prim_to_cons(&state), axes);
        for nv in 0..mhd.nvar() {
            assert!((ff.flux[nv] - exact[nv]).abs() < TOL);
        }
    }
}
