//! Conservation law abstractions.
//!
//! Provides a trait-based interface for the hyperbolic systems solved by the
//! finite-volume core:
//!
//! ∂U/∂t + ∇·F(U) = 0
//!
//! where U is the conserved state and F the physical flux. The Riemann
//! solvers only need the primitive/conservative conversion, the flux along
//! one axis and a signal speed, which is what [`Physics`] provides.

mod equation_of_state;
mod hydro;
mod layout;
mod mhd;

pub use equation_of_state::EnergyEquation;
pub use hydro::Hydro;
pub use layout::{MAX_VARS, StateVector, VarLayout};
pub use mhd::Mhd;

use crate::types::{Axis, SweepAxes};

/// A system of conservation laws in primitive/conservative form.
///
/// States are fixed-size [`StateVector`]s; only the first
/// `layout().nvar` entries are meaningful, the rest stay zero.
///
/// # Implementation Notes
///
/// - No clamping: unphysical input (negative density or pressure) yields
///   NaN, which propagates to the caller.
/// - Vector components are always read through [`SweepAxes`], so one
///   implementation serves every sweep direction.
///
/// # Example
///
/// ```
/// use fv_mhd::equations::{Hydro, Physics};
/// use fv_mhd::types::{Axis, SweepAxes};
///
/// let hydro = Hydro::adiabatic(1.4);
/// let mut prim = [0.0; 8];
/// prim[0] = 1.0; // density
/// prim[4] = 1.0; // pressure
/// let cons = hydro.prim_to_cons(&prim);
/// let flux = hydro.flux(&prim, &cons, SweepAxes::for_direction(Axis::I));
/// assert_eq!(flux[1], 1.0); // momentum flux = pressure at rest
/// ```
pub trait Physics: Clone + Send + Sync {
    /// Short name for logging.
    fn name(&self) -> &'static str;

    /// Variable indices.
    fn layout(&self) -> &VarLayout;

    /// Energy equation (adiabatic or isothermal closure).
    fn energy(&self) -> EnergyEquation;

    /// Number of variables in use.
    #[inline]
    fn nvar(&self) -> usize {
        self.layout().nvar
    }

    /// Whether an energy equation is evolved.
    #[inline]
    fn have_energy(&self) -> bool {
        self.layout().prs.is_some()
    }

    /// Names of the primitive variables, in layout order.
    fn variable_names(&self) -> Vec<&'static str> {
        self.layout().names()
    }

    /// Convert primitive variables to conserved variables.
    fn prim_to_cons(&self, prim: &StateVector) -> StateVector;

    /// Convert conserved variables to primitive variables.
    fn cons_to_prim(&self, cons: &StateVector) -> StateVector;

    /// Physical flux along `axes.normal`.
    ///
    /// `cons` must be `prim_to_cons(prim)`; it is passed in because callers
    /// already need both.
    fn flux(&self, prim: &StateVector, cons: &StateVector, axes: SweepAxes) -> StateVector;

    /// Characteristic signal speed relative to the flow along `axis`
    /// (sound speed for hydrodynamics, fast magnetosonic speed for MHD).
    fn signal_speed(&self, prim: &StateVector, axis: Axis) -> f64;

    /// Largest absolute characteristic speed `|vn| + c` along `axis`.
    fn max_wave_speed(&self, prim: &StateVector, axis: Axis) -> f64 {
        let vn = prim[self.layout().vx(axis)];
        vn.abs() + self.signal_speed(prim, axis)
    }
}
