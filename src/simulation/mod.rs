//! Run configuration and the flux stage of a time step.
//!
//! ```no_run
//! use fv_mhd::io::Input;
//! use fv_mhd::simulation::SimulationConfig;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let input = Input::from_file(std::path::Path::new("idefix.ini"))?;
//! let config = SimulationConfig::from_input(&input)?;
//! let core = config.hydro_core()?;
//! # let vc = fv_mhd::field::Array4::new(5, core.domain().grid().extents());
//! let step = core.compute_fluxes(&vc)?;
//! println!("dt = {}", step.dt);
//! # Ok(())
//! # }
//! ```

mod config;
mod hydro;

pub use config::{ConfigError, DEFAULT_GAMMA, SimulationConfig};
pub use hydro::{HydroCore, StepFluxes};
