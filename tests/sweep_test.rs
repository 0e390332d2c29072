//! Flux sweep on a uniform state.
//!
//! A uniform primitive state on both sides of every face must reproduce the
//! physical flux exactly and report the sound speed as the wave speed.

use fv_mhd::equations::{Hydro, Mhd, Physics, StateVector, VarLayout};
use fv_mhd::flux::{HllFlux, NumericalFlux, TvdlfFlux};
use fv_mhd::solver::{FluxKernel, Reconstruction, ReconstructionScheme, SlopeLimiter, SweepOutput};
use fv_mhd::types::{Axis, IndexRange3D, SweepAxes};
use fv_mhd::{Array4, Domain, Geometry, Grid, GridAxis, HydroCore};

const TOL: f64 = 1e-13;
const GAMMA: f64 = 5.0 / 3.0;

/// 4x4x4 interior cells of unit width with 2 ghosts per side.
fn unit_grid() -> Grid {
    let axis = || GridAxis::uniform(0.0, 4.0, 4, 2).unwrap();
    Grid::three_d(axis(), axis(), axis()).unwrap()
}

fn rest_state(layout: &VarLayout) -> StateVector {
    let mut prim = [0.0; 8];
    prim[VarLayout::RHO] = 1.0;
    if let Some(prs) = layout.prs {
        prim[prs] = 1.0;
    }
    prim
}

fn fill_uniform(grid: &Grid, nvar: usize, prim: &StateVector) -> Array4 {
    let mut vc = Array4::new(nvar, grid.extents());
    for (k, j, i) in IndexRange3D::full(grid.extents()).iter() {
        vc.scatter(k, j, i, &prim[..nvar]);
    }
    vc
}

fn check_uniform_sweep<P, F>(physics: P, solver: F, prim: StateVector, expected_cmax: f64)
where
    P: Physics,
    F: NumericalFlux<P>,
{
    let grid = unit_grid();
    let nvar = physics.nvar();
    let vc = fill_uniform(&grid, nvar, &prim);
    let cons = physics.prim_to_cons(&prim);
    let kernel = FluxKernel::new(physics, solver);

    for scheme in [
        ReconstructionScheme::DonorCell,
        ReconstructionScheme::Linear(SlopeLimiter::MonotonizedCentral),
    ] {
        for dir in Axis::ALL {
            let recon = Reconstruction::compute(&vc, dir, scheme);
            let mut out = SweepOutput::new(nvar, grid.extents(), dir);
            kernel.sweep(&grid, &recon, &mut out);

            let exact = kernel
                .physics()
                .flux(&prim, &cons, SweepAxes::for_direction(dir));
            let faces = grid.interior().face_range(dir);
            assert_eq!(faces.len(dir), 5);
            assert_eq!(faces.len(SweepAxes::for_direction(dir).tangential_1), 4);

            for (k, j, i) in faces.iter() {
                for nv in 0..nvar {
                    assert!(
                        (out.flux.get(nv, k, j, i) - exact[nv]).abs() < TOL,
                        "{scheme} {dir} var {nv} at ({k}, {j}, {i})"
                    );
                }
                assert!((out.cmax.get(k, j, i) - expected_cmax).abs() < TOL);
            }
        }
    }
}

#[test]
fn test_adiabatic_rest_state_tvdlf() {
    let physics = Hydro::adiabatic(GAMMA);
    let prim = rest_state(physics.layout());
    check_uniform_sweep(physics, TvdlfFlux, prim, GAMMA.sqrt());
}

#[test]
fn test_adiabatic_rest_state_hll() {
    let physics = Hydro::adiabatic(GAMMA);
    let prim = rest_state(physics.layout());
    check_uniform_sweep(physics, HllFlux, prim, GAMMA.sqrt());
}

#[test]
fn test_isothermal_rest_state() {
    let physics = Hydro::isothermal(0.7);
    let prim = rest_state(physics.layout());
    check_uniform_sweep(physics, TvdlfFlux, prim, 0.7);
}

#[test]
fn test_magnetized_uniform_state() {
    let physics = Mhd::adiabatic(GAMMA);
    let layout = *physics.layout();
    let mut prim = rest_state(&layout);
    // Field along x only: the fast speed along y and z is sqrt(a^2 + b^2)
    prim[layout.bx(Axis::I)] = 0.5;
    let cmax_x = GAMMA.sqrt().max(0.5);

    let grid = unit_grid();
    let vc = fill_uniform(&grid, layout.nvar, &prim);
    let kernel = FluxKernel::new(physics, TvdlfFlux);
    let recon = Reconstruction::donor_cell(&vc, Axis::I);
    let mut out = SweepOutput::new(layout.nvar, grid.extents(), Axis::I);
    kernel.sweep(&grid, &recon, &mut out);

    for (k, j, i) in grid.interior().face_range(Axis::I).iter() {
        assert!((out.cmax.get(k, j, i) - cmax_x).abs() < TOL);
    }

    let recon = Reconstruction::donor_cell(&vc, Axis::J);
    let mut out = SweepOutput::new(layout.nvar, grid.extents(), Axis::J);
    kernel.sweep(&grid, &recon, &mut out);
    let fast = (GAMMA + 0.25_f64).sqrt();
    for (k, j, i) in grid.interior().face_range(Axis::J).iter() {
        assert!((out.cmax.get(k, j, i) - fast).abs() < TOL);
    }
}

#[test]
fn test_sweep_is_order_independent() {
    // Split the face range into two slabs and sweep them separately
    let grid = unit_grid();
    let physics = Hydro::adiabatic(1.4);
    let nvar = physics.nvar();
    let mut vc = Array4::new(nvar, grid.extents());
    for (k, j, i) in IndexRange3D::full(grid.extents()).iter() {
        let x = (i + 2 * j + 3 * k) as f64;
        vc.scatter(k, j, i, &[1.0 + 0.1 * x.sin(), 0.2 * x.cos(), 0.1, -0.3, 1.0 + 0.05 * x]);
    }
    let kernel = FluxKernel::new(physics, HllFlux);

    for dir in Axis::ALL {
        let recon = Reconstruction::piecewise_linear(&vc, dir, SlopeLimiter::VanLeer);
        let faces = grid.interior().face_range(dir);

        let mut whole = SweepOutput::new(nvar, grid.extents(), dir);
        kernel.sweep_range(&faces, &recon, &mut whole);

        let mid = faces.begin(Axis::K) + faces.len(Axis::K) / 2;
        let lower = IndexRange3D::new(
            [faces.begin(Axis::I), faces.end(Axis::I)],
            [faces.begin(Axis::J), faces.end(Axis::J)],
            [faces.begin(Axis::K), mid],
        );
        let upper = IndexRange3D::new(
            [faces.begin(Axis::I), faces.end(Axis::I)],
            [faces.begin(Axis::J), faces.end(Axis::J)],
            [mid, faces.end(Axis::K)],
        );
        let mut split = SweepOutput::new(nvar, grid.extents(), dir);
        kernel.sweep_range(&upper, &recon, &mut split);
        kernel.sweep_range(&lower, &recon, &mut split);

        assert_eq!(whole.flux.as_slice(), split.flux.as_slice());
        assert_eq!(whole.cmax.as_slice(), split.cmax.as_slice());
    }
}

#[test]
fn test_rest_state_step() {
    let core = HydroCore::new(
        Domain::new(unit_grid(), Geometry::Cartesian),
        Hydro::adiabatic(GAMMA),
        TvdlfFlux,
        ReconstructionScheme::default(),
        0.9,
    )
    .unwrap();
    let physics = Hydro::adiabatic(GAMMA);
    let vc = fill_uniform(
        core.domain().grid(),
        physics.nvar(),
        &rest_state(physics.layout()),
    );

    let step = core.compute_fluxes(&vc).unwrap();
    assert!(step.rhs.as_slice().iter().all(|v| v.abs() < TOL));
    // Three directions, unit spacing
    assert!((step.dt - 0.9 / (3.0 * GAMMA.sqrt())).abs() < TOL);
}
