//! Benchmarks for the directional flux sweep and the full flux stage.
//!
//! Run with: `cargo bench --bench sweep_bench`
//!
//! Compare with `--no-default-features` for the sequential kernel.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fv_mhd::equations::{Hydro, Physics};
use fv_mhd::flux::{FluxType, StandardFlux};
use fv_mhd::solver::{FluxKernel, Reconstruction, ReconstructionScheme, SweepOutput};
use fv_mhd::types::{Axis, IndexRange3D};
use fv_mhd::{Array4, Domain, Geometry, Grid, GridAxis, HydroCore};

fn grid(n: usize) -> Grid {
    let axis = || GridAxis::uniform(0.0, 1.0, n, 2).expect("axis");
    Grid::three_d(axis(), axis(), axis()).expect("grid")
}

/// Smooth primitive state on the whole grid.
fn state(grid: &Grid, physics: &Hydro) -> Array4 {
    let mut vc = Array4::new(physics.nvar(), grid.extents());
    let [x1, x2, x3] = grid.axes();
    for (k, j, i) in IndexRange3D::full(grid.extents()).iter() {
        let s = (6.0 * x1.x[i]).sin() * (4.0 * x2.x[j]).cos() + x3.x[k];
        vc.scatter(k, j, i, &[1.0 + 0.2 * s, 0.1 * s, -0.2, 0.05 * s, 1.0 + 0.1 * s]);
    }
    vc
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");
    group.sample_size(20);
    let physics = Hydro::adiabatic(5.0 / 3.0);

    for n in [32, 64] {
        let grid = grid(n);
        let vc = state(&grid, &physics);

        for flux in [FluxType::Tvdlf, FluxType::Hll] {
            let kernel = FluxKernel::new(physics.clone(), StandardFlux::from(flux));
            let recon = Reconstruction::compute(&vc, Axis::I, ReconstructionScheme::default());
            let mut out = SweepOutput::new(physics.nvar(), grid.extents(), Axis::I);

            group.bench_function(BenchmarkId::new(flux.name(), format!("{n}^3")), |b| {
                b.iter(|| kernel.sweep(black_box(&grid), black_box(&recon), &mut out))
            });
        }
    }

    group.finish();
}

fn bench_reconstruction(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconstruction");
    group.sample_size(20);
    let physics = Hydro::adiabatic(5.0 / 3.0);
    let grid = grid(64);
    let vc = state(&grid, &physics);

    for scheme in [ReconstructionScheme::DonorCell, ReconstructionScheme::default()] {
        group.bench_function(scheme.to_string(), |b| {
            b.iter(|| Reconstruction::compute(black_box(&vc), Axis::J, scheme))
        });
    }

    group.finish();
}

fn bench_flux_stage(c: &mut Criterion) {
    let mut group = c.benchmark_group("flux_stage");
    group.sample_size(10);
    let physics = Hydro::adiabatic(5.0 / 3.0);

    for geometry in [Geometry::Cartesian, Geometry::Spherical] {
        let grid = Grid::three_d(
            GridAxis::uniform(1.0, 2.0, 48, 2).expect("axis"),
            GridAxis::uniform(0.5, 2.5, 48, 2).expect("axis"),
            GridAxis::uniform(0.0, 1.0, 48, 2).expect("axis"),
        )
        .expect("grid");
        let vc = state(&grid, &physics);
        let core = HydroCore::new(
            Domain::new(grid, geometry),
            physics.clone(),
            StandardFlux::Tvdlf,
            ReconstructionScheme::default(),
            0.5,
        )
        .expect("core");

        group.bench_function(geometry.name(), |b| {
            b.iter(|| core.compute_fluxes(black_box(&vc)).expect("finite step"))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sweep, bench_reconstruction, bench_flux_stage);
criterion_main!(benches);
