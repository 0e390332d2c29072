//! # fv-mhd
//!
//! Finite-volume building blocks for astrophysical hydrodynamics and MHD on
//! structured, possibly curvilinear, grids.
//!
//! The crate covers one flux stage of a Godunov-type scheme:
//! - Grid axes with ghost cells (uniform and logarithmic)
//! - Geometric factors (cell volumes, face areas, centroids) for Cartesian,
//!   cylindrical, polar and spherical coordinates
//! - Equation sets (adiabatic or isothermal hydro and MHD)
//! - Riemann solvers (TVDLF and HLL)
//! - Face reconstruction, the directional flux sweep and its consumers
//!   (flux divergence, CFL time step, finite-value checks)
//! - Parameter files and run configuration
//!
//! Time integration, boundary conditions and output are left to the caller.
//!
//! ```no_run
//! use fv_mhd::{Domain, Geometry, Grid, GridAxis};
//!
//! # fn main() -> Result<(), fv_mhd::GridError> {
//! let r = GridAxis::logarithmic(1.0, 10.0, 128, 2)?;
//! let theta = GridAxis::uniform(0.1, 3.0, 64, 2)?;
//! let domain = Domain::new(Grid::two_d(r, theta)?, Geometry::Spherical);
//! println!("total volume {}", domain.factors().total_volume(domain.grid()));
//! # Ok(())
//! # }
//! ```

pub mod equations;
pub mod field;
pub mod flux;
pub mod geometry;
pub mod io;
pub mod mesh;
pub mod simulation;
pub mod solver;
pub mod types;

// Re-export main types for convenience
pub use equations::{EnergyEquation, Hydro, Mhd, Physics, StateVector, VarLayout};
pub use field::{Array3, Array4};
pub use flux::{FluxType, HllFlux, NumericalFlux, StandardFlux, TvdlfFlux, hll_flux, tvdlf_flux};
pub use geometry::{CoordinateSystem, GeometricFactors, Geometry};
pub use io::{Input, InputError};
pub use mesh::{Domain, Grid, GridAxis, GridError};
pub use simulation::{ConfigError, HydroCore, SimulationConfig, StepFluxes};
pub use solver::{
    FluxKernel, NumericalError, Reconstruction, ReconstructionScheme, SlopeLimiter, SweepOutput,
};
pub use types::{Axis, Extents3D, IndexRange3D};
