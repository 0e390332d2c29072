//! Finite-volume solver components.
//!
//! One directional sweep runs:
//!
//! 1. [`Reconstruction`]: left/right primitive states on every face
//! 2. [`FluxKernel::sweep`]: Riemann solver per face, into a [`SweepOutput`]
//! 3. Consumers of the sweep output:
//!    - [`accumulate_flux_divergence`] for the conservative update
//!    - [`accumulate_inverse_dt`] and [`compute_dt`] for the CFL condition
//!
//! [`check_finite`] scans the results for NaN or infinite values.

mod cfl;
mod diagnostics;
mod kernel;
mod reconstruction;
mod update;

pub use cfl::{accumulate_inverse_dt, cell_length, compute_dt};
pub use diagnostics::{NumericalError, check_finite, check_time_step};
pub use kernel::{FluxKernel, SweepOutput};
pub use reconstruction::{Reconstruction, ReconstructionScheme, SlopeLimiter};
pub use update::accumulate_flux_divergence;
