//! Numerical flux functions.
//!
//! Provides approximate Riemann solvers for the finite-volume update:
//! - TVD Lax-Friedrichs (Rusanov) with an averaged-state wave speed
//! - HLL with Davis wave-speed estimates
//!
//! # Flux Trait
//!
//! The [`NumericalFlux`] trait provides a generic interface over any
//! [`Physics`](crate::equations::Physics).
//!
//! ## Built-in Flux Types
//! - [`TvdlfFlux`]: TVD Lax-Friedrichs
//! - [`HllFlux`]: HLL solver
//! - [`StandardFlux`]: Enum for zero-cost dispatch
//! - [`BoxedFlux`]: Trait object for runtime selection

mod hll;
pub mod traits;
mod tvdlf;

use std::fmt;

pub use hll::hll_flux;
pub use tvdlf::tvdlf_flux;

pub use traits::{
    BoxedFlux, FaceFlux, FluxContext, HllFlux, NumericalFlux, StandardFlux, TvdlfFlux,
    create_flux,
};

/// Riemann solver selection, as named in parameter files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FluxType {
    /// TVD Lax-Friedrichs
    #[default]
    Tvdlf,
    /// HLL
    Hll,
}

impl FluxType {
    /// Parse a solver name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "tvdlf" => Some(FluxType::Tvdlf),
            "hll" => Some(FluxType::Hll),
            _ => None,
        }
    }

    /// Lower-case name.
    pub fn name(&self) -> &'static str {
        match self {
            FluxType::Tvdlf => "tvdlf",
            FluxType::Hll => "hll",
        }
    }
}

impl fmt::Display for FluxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maximum that returns NaN when either argument is NaN.
#[inline(always)]
pub(crate) fn nan_max(a: f64, b: f64) -> f64 {
    if a > b || a.is_nan() { a } else { b }
}

/// Minimum that returns NaN when either argument is NaN.
#[inline(always)]
pub(crate) fn nan_min(a: f64, b: f64) -> f64 {
    if a < b || a.is_nan() { a } else { b }
}
