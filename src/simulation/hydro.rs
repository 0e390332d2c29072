//! Flux stage of one time step.

use std::time::Instant;

use crate::equations::Physics;
use crate::field::{Array3, Array4};
use crate::flux::NumericalFlux;
use crate::mesh::Domain;
use crate::solver::{
    FluxKernel, NumericalError, Reconstruction, ReconstructionScheme, SweepOutput,
    accumulate_flux_divergence, accumulate_inverse_dt, check_finite, check_time_step, compute_dt,
};
use crate::types::Axis;

use super::ConfigError;

/// Result of [`HydroCore::compute_fluxes`].
#[derive(Clone, Debug)]
pub struct StepFluxes {
    /// Flux divergence of the conserved variables on the interior cells
    /// (zero in ghosts).
    ///
    /// Geometric source terms are not included, so a curvilinear state at
    /// rest still shows a non-zero radial momentum tendency here.
    pub rhs: Array4,
    /// Sum over directions of the per-cell inverse time step
    pub inv_dt: Array3,
    /// Stable time step for the configured CFL number
    pub dt: f64,
}

/// Hydrodynamics core: a domain, a flux kernel and the step parameters.
#[derive(Clone, Debug)]
pub struct HydroCore<P, F> {
    domain: Domain,
    kernel: FluxKernel<P, F>,
    reconstruction: ReconstructionScheme,
    cfl: f64,
}

impl<P: Physics, F: NumericalFlux<P>> HydroCore<P, F> {
    /// Build a core, checking that every active axis carries enough ghost
    /// cells for `reconstruction`.
    pub fn new(
        domain: Domain,
        physics: P,
        solver: F,
        reconstruction: ReconstructionScheme,
        cfl: f64,
    ) -> Result<Self, ConfigError> {
        let required = reconstruction.required_ghosts();
        for axis in domain.grid().active_axes() {
            let available = domain.grid().axis(axis).n_ghost;
            if available < required {
                return Err(ConfigError::InsufficientGhosts {
                    axis,
                    required,
                    available,
                });
            }
        }

        log::info!(
            "{} core with {} flux, {} reconstruction, CFL {}",
            physics.name(),
            solver.name(),
            reconstruction,
            cfl
        );

        Ok(Self {
            domain,
            kernel: FluxKernel::new(physics, solver),
            reconstruction,
            cfl,
        })
    }

    /// Grid and coordinate system.
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Flux kernel used by every sweep.
    pub fn kernel(&self) -> &FluxKernel<P, F> {
        &self.kernel
    }

    /// Face reconstruction scheme.
    pub fn reconstruction(&self) -> ReconstructionScheme {
        self.reconstruction
    }

    /// CFL number applied to the time step.
    pub fn cfl(&self) -> f64 {
        self.cfl
    }

    /// Reconstruct and sweep along `dir`.
    ///
    /// # Panics
    /// Panics if `vc` does not match the grid extents or variable count.
    pub fn sweep(&self, vc: &Array4, dir: Axis) -> SweepOutput {
        let grid = self.domain.grid();
        assert_eq!(vc.extents(), grid.extents(), "Primitive field extents");
        assert_eq!(
            vc.nvar(),
            self.kernel.physics().nvar(),
            "Primitive field variable count"
        );

        let recon = Reconstruction::compute(vc, dir, self.reconstruction);
        let mut out = SweepOutput::new(vc.nvar(), grid.extents(), dir);
        self.kernel.sweep(grid, &recon, &mut out);
        out
    }

    /// Fluxes, right-hand side and time step for the primitive state `vc`.
    ///
    /// `vc` holds primitive variables on the full grid with ghost cells
    /// already filled.
    pub fn compute_fluxes(&self, vc: &Array4) -> Result<StepFluxes, NumericalError> {
        let grid = self.domain.grid();
        let geometry = self.domain.geometry();
        let cells = grid.interior();

        let mut rhs = Array4::new(vc.nvar(), grid.extents());
        let mut inv_dt = Array3::new(grid.extents());

        for dir in grid.active_axes() {
            let start = Instant::now();
            let sweep = self.sweep(vc, dir);
            accumulate_flux_divergence(&mut rhs, &sweep, self.domain.factors(), &cells);
            accumulate_inverse_dt(&mut inv_dt, &sweep, grid, geometry, &cells);
            log::trace!("Sweep along {} took {:?}", dir, start.elapsed());
        }

        let names = self.kernel.physics().variable_names();
        check_finite(&rhs, &names, &cells)?;

        let dt = check_time_step(compute_dt(&inv_dt, &cells, self.cfl))?;
        log::debug!("dt = {dt:.6e}");

        Ok(StepFluxes { rhs, inv_dt, dt })
    }
}
