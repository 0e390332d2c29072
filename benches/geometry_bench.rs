//! Benchmarks for geometric factor computation.
//!
//! Run with: `cargo bench --bench geometry_bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fv_mhd::{GeometricFactors, Geometry, Grid, GridAxis};

fn grid(n: usize) -> Grid {
    Grid::three_d(
        GridAxis::logarithmic(1.0, 10.0, n, 2).expect("radial axis"),
        GridAxis::uniform(0.2, 2.9, n, 2).expect("polar axis"),
        GridAxis::uniform(0.0, 6.0, n, 2).expect("azimuthal axis"),
    )
    .expect("grid")
}

fn bench_factors(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometric_factors");
    group.sample_size(20);

    for n in [16, 32, 64] {
        let grid = grid(n);
        for geometry in Geometry::ALL {
            group.bench_with_input(
                BenchmarkId::new(geometry.name(), format!("{n}^3")),
                &grid,
                |b, grid| b.iter(|| GeometricFactors::compute(black_box(grid), geometry)),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_factors);
criterion_main!(benches);
