//! Trait-based numerical flux abstraction.
//!
//! This module provides a trait-based interface for Riemann solvers,
//! enabling extensible flux implementations while maintaining performance
//! through both generic and dynamic dispatch options.
//!
//! # Example
//! ```
//! use fv_mhd::equations::Hydro;
//! use fv_mhd::flux::{FluxContext, HllFlux, NumericalFlux, TvdlfFlux};
//! use fv_mhd::types::{Axis, SweepAxes};
//!
//! let hydro = Hydro::adiabatic(1.4);
//! let ctx = FluxContext::new(&hydro, SweepAxes::for_direction(Axis::I));
//! let left = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0];
//! let right = [0.125, 0.0, 0.0, 0.0, 0.1, 0.0, 0.0, 0.0];
//!
//! // Using concrete type
//! let lf = TvdlfFlux.compute(&left, &right, &ctx);
//!
//! // Using trait object
//! let solver: &dyn NumericalFlux<Hydro> = &HllFlux;
//! let hll = solver.compute(&left, &right, &ctx);
//! assert!(lf.flux[0] > 0.0 && hll.flux[0] > 0.0);
//! ```

use crate::equations::{Physics, StateVector};
use crate::types::SweepAxes;

use super::{FluxType, hll_flux, tvdlf_flux};

// =============================================================================
// Flux Context
// =============================================================================

/// Context provided to numerical flux computations.
///
/// Holds the equation set and the normal/tangential mapping of the sweep.
#[derive(Debug)]
pub struct FluxContext<'a, P> {
    /// Equation set
    pub physics: &'a P,
    /// Normal and tangential axes of the sweep
    pub axes: SweepAxes,
}

impl<P> Clone for FluxContext<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for FluxContext<'_, P> {}

impl<'a, P> FluxContext<'a, P> {
    /// Create a new flux context.
    #[inline]
    pub fn new(physics: &'a P, axes: SweepAxes) -> Self {
        Self { physics, axes }
    }
}

/// Interface flux and the wave speed it was computed with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceFlux {
    /// Numerical flux, same layout as the state
    pub flux: StateVector,
    /// Maximum signal speed at the face
    pub cmax: f64,
}

// =============================================================================
// Numerical Flux Trait
// =============================================================================

/// Trait for approximate Riemann solvers.
///
/// A numerical flux computes the interface flux along `ctx.axes.normal`
/// from the left and right primitive states.
///
/// # Implementation Notes
///
/// - Fluxes should be consistent: F*(q, q) = F(q)
/// - Fluxes should be conservative under mirror reflection of the normal axis
/// - The `compute` method must not allocate memory
pub trait NumericalFlux<P: Physics>: Send + Sync {
    /// Compute the numerical flux at an interface.
    fn compute(&self, left: &StateVector, right: &StateVector, ctx: &FluxContext<'_, P>)
    -> FaceFlux;

    /// Human-readable name for debugging and logging.
    fn name(&self) -> &'static str;

    /// Recommended CFL factor for this flux.
    fn recommended_cfl(&self) -> f64 {
        0.5
    }
}

// =============================================================================
// Concrete Flux Implementations
// =============================================================================

/// TVD Lax-Friedrichs solver with the averaged-state wave speed.
///
/// Simple and robust but diffusive.
#[derive(Clone, Copy, Debug, Default)]
pub struct TvdlfFlux;

impl<P: Physics> NumericalFlux<P> for TvdlfFlux {
    #[inline]
    fn compute(
        &self,
        left: &StateVector,
        right: &StateVector,
        ctx: &FluxContext<'_, P>,
    ) -> FaceFlux {
        tvdlf_flux(ctx.physics, left, right, ctx.axes)
    }

    fn name(&self) -> &'static str {
        "tvdlf"
    }

    fn recommended_cfl(&self) -> f64 {
        0.4
    }
}

/// HLL solver.
///
/// Uses bounds on the fastest wave speeds of both sides.
#[derive(Clone, Copy, Debug, Default)]
pub struct HllFlux;

impl<P: Physics> NumericalFlux<P> for HllFlux {
    #[inline]
    fn compute(
        &self,
        left: &StateVector,
        right: &StateVector,
        ctx: &FluxContext<'_, P>,
    ) -> FaceFlux {
        hll_flux(ctx.physics, left, right, ctx.axes)
    }

    fn name(&self) -> &'static str {
        "hll"
    }
}

// =============================================================================
// Standard Flux Enum (Zero-Cost Dispatch)
// =============================================================================

/// Enum wrapper for built-in flux types.
///
/// Avoids virtual dispatch while still allowing runtime selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StandardFlux {
    /// TVD Lax-Friedrichs
    #[default]
    Tvdlf,
    /// HLL
    Hll,
}

impl<P: Physics> NumericalFlux<P> for StandardFlux {
    #[inline]
    fn compute(
        &self,
        left: &StateVector,
        right: &StateVector,
        ctx: &FluxContext<'_, P>,
    ) -> FaceFlux {
        match self {
            StandardFlux::Tvdlf => tvdlf_flux(ctx.physics, left, right, ctx.axes),
            StandardFlux::Hll => hll_flux(ctx.physics, left, right, ctx.axes),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            StandardFlux::Tvdlf => "tvdlf",
            StandardFlux::Hll => "hll",
        }
    }

    fn recommended_cfl(&self) -> f64 {
        match self {
            StandardFlux::Tvdlf => 0.4,
            StandardFlux::Hll => 0.5,
        }
    }
}

impl From<FluxType> for StandardFlux {
    fn from(flux_type: FluxType) -> Self {
        match flux_type {
            FluxType::Tvdlf => StandardFlux::Tvdlf,
            FluxType::Hll => StandardFlux::Hll,
        }
    }
}

impl From<StandardFlux> for FluxType {
    fn from(flux: StandardFlux) -> Self {
        match flux {
            StandardFlux::Tvdlf => FluxType::Tvdlf,
            StandardFlux::Hll => FluxType::Hll,
        }
    }
}

// =============================================================================
// Boxed Flux (Runtime Polymorphism)
// =============================================================================

/// Type alias for boxed flux (runtime polymorphism).
pub type BoxedFlux<P> = Box<dyn NumericalFlux<P>>;

/// Create a boxed flux from a flux type.
///
/// Useful for configuration-driven flux selection.
pub fn create_flux<P: Physics>(flux_type: FluxType) -> BoxedFlux<P> {
    match flux_type {
        FluxType::Tvdlf => Box::new(TvdlfFlux),
        FluxType::Hll => Box::new(HllFlux),
    }
}

impl<P: Physics> NumericalFlux<P> for BoxedFlux<P> {
    #[inline]
    fn compute(
        &self,
        left: &StateVector,
        right: &StateVector,
        ctx: &FluxContext<'_, P>,
    ) -> FaceFlux {
        (**self).compute(left, right, ctx)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn recommended_cfl(&self) -> f64 {
        (**self).recommended_cfl()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::{Hydro, MAX_VARS, Mhd};
    use crate::types::Axis;

    const TOL: f64 = 1e-12;

    fn left() -> StateVector {
        [1.0, 0.4, -0.2, 0.3, 1.0, 0.0, 0.0, 0.0]
    }

    fn right() -> StateVector {
        [0.3, -0.1, 0.5, 0.0, 0.2, 0.0, 0.0, 0.0]
    }

    /// Reflect the normal velocity of a primitive state.
    fn mirror<P: Physics>(physics: &P, state: &StateVector, dir: Axis) -> StateVector {
        let mut m = *state;
        m[physics.layout().vx(dir)] *= -1.0;
        m
    }

    fn check_antisymmetry<P: Physics, F: NumericalFlux<P>>(physics: &P, solver: &F) {
        for dir in Axis::ALL {
            let ctx = FluxContext::new(physics, SweepAxes::for_direction(dir));
            let (a, b) = (left(), right());
            let forward = solver.compute(&a, &b, &ctx);
            let mirrored = solver.compute(
                &mirror(physics, &b, dir),
                &mirror(physics, &a, dir),
                &ctx,
            );

            // Normal momentum flux is even under reflection, the rest odd
            let ivn = physics.layout().vx(dir);
            for nv in 0..physics.nvar() {
                let sign = if nv == ivn { 1.0 } else { -1.0 };
                assert!(
                    (mirrored.flux[nv] - sign * forward.flux[nv]).abs() < TOL,
                    "{} along {dir}: var {nv}",
                    solver.name()
                );
            }
            assert!((mirrored.cmax - forward.cmax).abs() < TOL);
        }
    }

    #[test]
    fn test_flux_antisymmetry() {
        let hydro = Hydro::adiabatic(1.4);
        check_antisymmetry(&hydro, &TvdlfFlux);
        check_antisymmetry(&hydro, &HllFlux);

        let iso = Hydro::isothermal(0.7);
        check_antisymmetry(&iso, &TvdlfFlux);
    }

    #[test]
    fn test_standard_flux_enum() {
        let hydro = Hydro::adiabatic(1.4);
        let ctx = FluxContext::new(&hydro, SweepAxes::for_direction(Axis::J));

        // Enum dispatch should match concrete type dispatch
        let concrete = TvdlfFlux.compute(&left(), &right(), &ctx);
        let via_enum = StandardFlux::Tvdlf.compute(&left(), &right(), &ctx);
        assert_eq!(concrete, via_enum);

        let concrete = HllFlux.compute(&left(), &right(), &ctx);
        let via_enum = StandardFlux::Hll.compute(&left(), &right(), &ctx);
        assert_eq!(concrete, via_enum);
    }

    #[test]
    fn test_boxed_flux() {
        let mhd = Mhd::adiabatic(5.0 / 3.0);
        let ctx = FluxContext::new(&mhd, SweepAxes::for_direction(Axis::K));
        let state: StateVector = [1.0, 0.1, 0.0, -0.2, 0.3, 0.0, 0.4, 0.6];

        let boxed: BoxedFlux<Mhd> = create_flux(FluxType::Hll);
        assert_eq!(boxed.name(), "hll");
        let result = boxed.compute(&state, &state, &ctx);
        let exact = mhd.flux(&state, &mhd.prim_to_cons(&state), ctx.axes);
        for nv in 0..MAX_VARS {
            assert!((result.flux[nv] - exact[nv]).abs() < TOL);
        }
    }

    #[test]
    fn test_flux_type_conversion() {
        for t in [FluxType::Tvdlf, FluxType::Hll] {
            assert_eq!(FluxType::from(StandardFlux::from(t)), t);
        }
        let f = StandardFlux::from(FluxType::Tvdlf);
        assert!((<StandardFlux as NumericalFlux<Hydro>>::recommended_cfl(&f) - 0.4).abs() < TOL);
    }
}
