//! Flux assembly along one sweep direction.
//!
//! For every face in the sweep range the kernel gathers the reconstructed
//! left and right states, calls the Riemann solver and stores the interface
//! flux and the wave speed. Faces are independent, so k-planes are processed
//! in parallel when the `parallel` feature is enabled; the result does not
//! depend on the order.

use crate::equations::{MAX_VARS, Physics};
use crate::field::{Array3, Array4};
use crate::flux::{FluxContext, NumericalFlux};
use crate::mesh::Grid;
use crate::types::{Axis, Extents3D, IndexRange3D, SweepAxes};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::Reconstruction;

/// Interface fluxes and wave speeds of one sweep.
///
/// Arrays are face-sized along `direction`. Faces outside the swept range
/// keep their previous values.
#[derive(Clone, Debug)]
pub struct SweepOutput {
    /// Sweep direction
    pub direction: Axis,
    /// Numerical flux per variable and face
    pub flux: Array4,
    /// Maximum signal speed per face
    pub cmax: Array3,
}

impl SweepOutput {
    /// Zeroed output for cell arrays of extent `cells`.
    pub fn new(nvar: usize, cells: Extents3D, direction: Axis) -> Self {
        let faces = cells.with_faces(direction);
        Self {
            direction,
            flux: Array4::new(nvar, faces),
            cmax: Array3::new(faces),
        }
    }
}

/// Flux assembly kernel: an equation set paired with a Riemann solver.
#[derive(Clone, Debug)]
pub struct FluxKernel<P, F> {
    physics: P,
    solver: F,
}

impl<P: Physics, F: NumericalFlux<P>> FluxKernel<P, F> {
    /// Create a kernel.
    pub fn new(physics: P, solver: F) -> Self {
        Self { physics, solver }
    }

    /// Equation set.
    pub fn physics(&self) -> &P {
        &self.physics
    }

    /// Riemann solver.
    pub fn solver(&self) -> &F {
        &self.solver
    }

    /// Compute fluxes on the faces bounding the interior cells of `grid`
    /// along `recon.direction`.
    pub fn sweep(&self, grid: &Grid, recon: &Reconstruction, out: &mut SweepOutput) {
        let faces = grid.interior().face_range(recon.direction);
        self.sweep_range(&faces, recon, out);
    }

    /// Compute fluxes on the faces of `faces` (face indices).
    ///
    /// # Panics
    /// Panics if `recon` and `out` disagree on the direction.
    pub fn sweep_range(&self, faces: &IndexRange3D, recon: &Reconstruction, out: &mut SweepOutput) {
        assert_eq!(
            recon.direction, out.direction,
            "Reconstruction and sweep output directions differ"
        );

        let ctx = FluxContext::new(&self.physics, SweepAxes::for_direction(recon.direction));
        let nvar = self.physics.nvar();
        let extents = out.cmax.extents();
        let plane = extents.plane();

        let flux_planes = out.flux.planes_mut();
        let process = |(k, (mut flux_k, cmax_k)): (usize, (Vec<&mut [f64]>, &mut [f64]))| {
            if k < faces.begin(Axis::K) || k >= faces.end(Axis::K) {
                return;
            }
            let mut left = [0.0; MAX_VARS];
            let mut right = [0.0; MAX_VARS];
            for j in faces.begin(Axis::J)..faces.end(Axis::J) {
                for i in faces.begin(Axis::I)..faces.end(Axis::I) {
                    recon.prim_l.gather(k, j, i, &mut left[..nvar]);
                    recon.prim_r.gather(k, j, i, &mut right[..nvar]);

                    let face = self.solver.compute(&left, &right, &ctx);

                    let idx = j * extents.ni + i;
                    for (nv, plane_nv) in flux_k.iter_mut().enumerate() {
                        plane_nv[idx] = face.flux[nv];
                    }
                    cmax_k[idx] = face.cmax;
                }
            }
        };

        #[cfg(feature = "parallel")]
        flux_planes
            .into_par_iter()
            .zip(out.cmax.as_mut_slice().par_chunks_mut(plane))
            .enumerate()
            .for_each(process);
        #[cfg(not(feature = "parallel"))]
        flux_planes
            .into_iter()
            .zip(out.cmax.as_mut_slice().chunks_mut(plane))
            .enumerate()
            .for_each(process);

        log::trace!(
            "Swept {} faces along {} with {}",
            faces.count(),
            recon.direction,
            self.solver.name()
        );
    }
}
