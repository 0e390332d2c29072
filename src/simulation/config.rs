//! Run configuration from a parameter file.
//!
//! Recognised entries:
//!
//! ```text
//! [Grid]
//! X1-grid    1  0.0  64  u  1.0    # nPatch x_start n type(u|l) x_end
//! X2-grid    1  0.0  32  u  1.0    # optional, adds a dimension
//! geometry   cartesian             # cartesian|cylindrical|polar|spherical
//! nghost     2                     # optional
//!
//! [Hydro]
//! solver          tvdlf            # tvdlf|hll
//! gamma           1.4              # adiabatic index
//! csiso           constant 1.0     # isothermal instead of adiabatic
//! mhd             no               # yes|no
//! reconstruction  linear           # donor|linear
//! limiter         vanleer          # minmod|vanleer|mc
//!
//! [TimeIntegrator]
//! CFL        0.8
//! ```

use thiserror::Error;

use crate::equations::{EnergyEquation, Hydro, Mhd};
use crate::flux::{FluxType, StandardFlux};
use crate::geometry::Geometry;
use crate::io::{Input, InputError};
use crate::mesh::{Domain, Grid, GridAxis, GridError};
use crate::solver::{ReconstructionScheme, SlopeLimiter};
use crate::types::Axis;

use super::HydroCore;

/// Default adiabatic index when `[Hydro] gamma` is absent.
pub const DEFAULT_GAMMA: f64 = 5.0 / 3.0;

/// Error type for building a run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Parameter file error
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Grid construction error
    #[error("Grid error: {0}")]
    Grid(#[from] GridError),

    /// Parameter present but unusable
    #[error("Invalid value '{value}' for {block}:{name}: {reason}")]
    InvalidValue {
        block: String,
        name: String,
        value: String,
        reason: String,
    },

    /// Too few ghost cells for the reconstruction stencil
    #[error("Axis {axis} has {available} ghost cells, reconstruction needs {required}")]
    InsufficientGhosts {
        axis: Axis,
        required: usize,
        available: usize,
    },

    /// Equation set does not match the requested core
    #[error("Configuration requests {requested} but {built} was built")]
    PhysicsMismatch {
        requested: &'static str,
        built: &'static str,
    },
}

impl ConfigError {
    fn invalid(block: &str, name: &str, value: impl ToString, reason: impl ToString) -> Self {
        ConfigError::InvalidValue {
            block: block.to_string(),
            name: name.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Everything needed to build a [`HydroCore`].
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    /// Computational grid
    pub grid: Grid,
    /// Coordinate system
    pub geometry: Geometry,
    /// Riemann solver
    pub flux: FluxType,
    /// Thermodynamic closure
    pub energy: EnergyEquation,
    /// Evolve a magnetic field
    pub mhd: bool,
    /// Face reconstruction
    pub reconstruction: ReconstructionScheme,
    /// CFL number
    pub cfl: f64,
}

impl SimulationConfig {
    /// Cartesian hydrodynamics on `grid` with default settings.
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            geometry: Geometry::default(),
            flux: FluxType::default(),
            energy: EnergyEquation::Adiabatic {
                gamma: DEFAULT_GAMMA,
            },
            mhd: false,
            reconstruction: ReconstructionScheme::default(),
            cfl: 0.5,
        }
    }

    /// Set the coordinate system.
    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Set the Riemann solver.
    pub fn with_flux(mut self, flux: FluxType) -> Self {
        self.flux = flux;
        self
    }

    /// Set the thermodynamic closure.
    pub fn with_energy(mut self, energy: EnergyEquation) -> Self {
        self.energy = energy;
        self
    }

    /// Evolve a magnetic field.
    pub fn with_mhd(mut self, mhd: bool) -> Self {
        self.mhd = mhd;
        self
    }

    /// Set the reconstruction scheme.
    pub fn with_reconstruction(mut self, reconstruction: ReconstructionScheme) -> Self {
        self.reconstruction = reconstruction;
        self
    }

    /// Set the CFL number.
    pub fn with_cfl(mut self, cfl: f64) -> Self {
        self.cfl = cfl;
        self
    }

    /// Read the configuration from parsed parameters.
    pub fn from_input(input: &Input) -> Result<Self, ConfigError> {
        let reconstruction = read_reconstruction(input)?;
        let n_ghost = match input.check_entry("Grid", "nghost") {
            Some(_) => {
                let n = input.get_int("Grid", "nghost", 0)?;
                usize::try_from(n).map_err(|_| {
                    ConfigError::invalid("Grid", "nghost", n, "must be non-negative")
                })?
            }
            None => reconstruction.required_ghosts(),
        };

        let grid = read_grid(input, n_ghost)?;

        let geometry = match input.check_entry("Grid", "geometry") {
            Some(_) => {
                let name = input.get_string("Grid", "geometry", 0)?;
                Geometry::from_name(name).ok_or_else(|| {
                    ConfigError::invalid("Grid", "geometry", name, "unknown geometry")
                })?
            }
            None => Geometry::default(),
        };

        let flux = match input.check_entry("Hydro", "solver") {
            Some(_) => {
                let name = input.get_string("Hydro", "solver", 0)?;
                FluxType::from_name(name).ok_or_else(|| {
                    ConfigError::invalid("Hydro", "solver", name, "expected tvdlf or hll")
                })?
            }
            None => FluxType::default(),
        };

        let energy = read_energy(input)?;

        let mhd = match input.check_entry("Hydro", "mhd") {
            Some(_) => parse_flag("Hydro", "mhd", input.get_string("Hydro", "mhd", 0)?)?,
            None => false,
        };

        let cfl = input.get_real("TimeIntegrator", "CFL", 0)?;
        if !(cfl > 0.0 && cfl.is_finite()) {
            return Err(ConfigError::invalid(
                "TimeIntegrator",
                "CFL",
                cfl,
                "must be positive",
            ));
        }

        let config = Self {
            grid,
            geometry,
            flux,
            energy,
            mhd,
            reconstruction,
            cfl,
        };
        log::info!(
            "Configuration: {}D {} grid, {} solver, {} reconstruction, CFL {}",
            config.grid.dimensions(),
            config.geometry,
            config.flux,
            config.reconstruction,
            config.cfl
        );
        Ok(config)
    }

    /// Build a hydrodynamics core.
    pub fn hydro_core(&self) -> Result<HydroCore<Hydro, StandardFlux>, ConfigError> {
        if self.mhd {
            return Err(ConfigError::PhysicsMismatch {
                requested: "mhd",
                built: "hydro",
            });
        }
        HydroCore::new(
            Domain::new(self.grid.clone(), self.geometry),
            Hydro::new(self.energy),
            StandardFlux::from(self.flux),
            self.reconstruction,
            self.cfl,
        )
    }

    /// Build an MHD core.
    pub fn mhd_core(&self) -> Result<HydroCore<Mhd, StandardFlux>, ConfigError> {
        if !self.mhd {
            return Err(ConfigError::PhysicsMismatch {
                requested: "hydro",
                built: "mhd",
            });
        }
        HydroCore::new(
            Domain::new(self.grid.clone(), self.geometry),
            Mhd::new(self.energy),
            StandardFlux::from(self.flux),
            self.reconstruction,
            self.cfl,
        )
    }
}

/// `X{d}-grid nPatch x_start n type x_end` for every present axis.
fn read_grid(input: &Input, n_ghost: usize) -> Result<Grid, ConfigError> {
    let names = ["X1-grid", "X2-grid", "X3-grid"];
    let present: Vec<bool> = names
        .iter()
        .map(|n| input.check_entry("Grid", n).is_some())
        .collect();

    let dimensions = present.iter().take_while(|p| **p).count();
    if dimensions == 0 {
        input.get_string("Grid", names[0], 0)?;
    }
    if let Some(extra) = present.iter().skip(dimensions).position(|p| *p) {
        let name = names[dimensions + extra];
        return Err(ConfigError::invalid(
            "Grid",
            name,
            input.get_string("Grid", name, 0)?,
            format!("requires X{}-grid", dimensions + 1),
        ));
    }

    let mut axes = [
        GridAxis::inactive(),
        GridAxis::inactive(),
        GridAxis::inactive(),
    ];
    for (d, axis) in axes.iter_mut().enumerate().take(dimensions) {
        *axis = read_axis(input, names[d], n_ghost)?;
    }
    Ok(Grid::new(axes, dimensions)?)
}

fn read_axis(input: &Input, name: &str, n_ghost: usize) -> Result<GridAxis, ConfigError> {
    let n_patch = input.get_int("Grid", name, 0)?;
    if n_patch != 1 {
        return Err(ConfigError::invalid(
            "Grid",
            name,
            n_patch,
            "only single-patch axes are supported",
        ));
    }

    let x_start = input.get_real("Grid", name, 1)?;
    let n = input.get_int("Grid", name, 2)?;
    let n = usize::try_from(n)
        .map_err(|_| ConfigError::invalid("Grid", name, n, "cell count must be positive"))?;
    let kind = input.get_string("Grid", name, 3)?;
    let x_end = input.get_real("Grid", name, 4)?;

    let axis = match kind {
        "u" => GridAxis::uniform(x_start, x_end, n, n_ghost)?,
        "l" => GridAxis::logarithmic(x_start, x_end, n, n_ghost)?,
        other => {
            return Err(ConfigError::invalid(
                "Grid",
                name,
                other,
                "patch type must be u or l",
            ));
        }
    };
    Ok(axis)
}

fn read_energy(input: &Input) -> Result<EnergyEquation, ConfigError> {
    if input.check_entry("Hydro", "csiso").is_some() {
        let kind = input.get_string("Hydro", "csiso", 0)?;
        if kind != "constant" {
            return Err(ConfigError::invalid(
                "Hydro",
                "csiso",
                kind,
                "only constant isothermal sound speed is supported",
            ));
        }
        let cs = input.get_real("Hydro", "csiso", 1)?;
        return Ok(EnergyEquation::isothermal(cs));
    }

    let gamma = match input.check_entry("Hydro", "gamma") {
        Some(_) => input.get_real("Hydro", "gamma", 0)?,
        None => DEFAULT_GAMMA,
    };
    if !(gamma > 1.0) {
        return Err(ConfigError::invalid("Hydro", "gamma", gamma, "must exceed 1"));
    }
    Ok(EnergyEquation::Adiabatic { gamma })
}

fn read_reconstruction(input: &Input) -> Result<ReconstructionScheme, ConfigError> {
    let limiter = match input.check_entry("Hydro", "limiter") {
        Some(_) => {
            let name = input.get_string("Hydro", "limiter", 0)?;
            SlopeLimiter::from_name(name).ok_or_else(|| {
                ConfigError::invalid("Hydro", "limiter", name, "expected minmod, vanleer or mc")
            })?
        }
        None => SlopeLimiter::default(),
    };

    match input.check_entry("Hydro", "reconstruction") {
        Some(_) => match input.get_string("Hydro", "reconstruction", 0)? {
            "donor" => Ok(ReconstructionScheme::DonorCell),
            "linear" => Ok(ReconstructionScheme::Linear(limiter)),
            other => Err(ConfigError::invalid(
                "Hydro",
                "reconstruction",
                other,
                "expected donor or linear",
            )),
        },
        None => Ok(ReconstructionScheme::Linear(limiter)),
    }
}

fn parse_flag(block: &str, name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "yes" | "true" | "on" => Ok(true),
        "no" | "false" | "off" => Ok(false),
        _ => Err(ConfigError::invalid(block, name, value, "expected yes or no")),
    }
}
