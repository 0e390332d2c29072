//! Geometric factors across coordinate systems.

use fv_mhd::solver::{SweepOutput, accumulate_flux_divergence};
use fv_mhd::types::{Axis, FaceIndex, IndexRange3D};
use fv_mhd::{Array4, GeometricFactors, Geometry, Grid, GridAxis};
use std::f64::consts::PI;

const TOL: f64 = 1e-12;

fn radial_grid(dimensions: usize) -> Grid {
    let r = GridAxis::uniform(1.0, 3.0, 16, 2).unwrap();
    let theta = GridAxis::uniform(0.8, 2.3, 8, 2).unwrap();
    let phi = GridAxis::uniform(0.0, 1.5, 4, 2).unwrap();
    match dimensions {
        1 => Grid::one_d(r).unwrap(),
        2 => Grid::two_d(r, theta).unwrap(),
        _ => Grid::three_d(r, theta, phi).unwrap(),
    }
}

#[test]
fn test_spherical_radial_volumes() {
    let r = GridAxis::from_faces(&[1.0, 2.0, 3.0, 4.0, 5.0], 2).unwrap();
    let grid = Grid::one_d(r).unwrap();
    let factors = GeometricFactors::compute(&grid, Geometry::Spherical);

    let r_left = [1.0_f64, 2.0, 3.0, 4.0];
    let r_right = [2.0_f64, 3.0, 4.0, 5.0];
    for (n, i) in (grid.axis(Axis::I).begin()..grid.axis(Axis::I).end()).enumerate() {
        let expected = (r_right[n].powi(3) - r_left[n].powi(3)) / 3.0;
        let dv = factors.volume(0, 0, i);
        assert!(
            (dv - expected).abs() <= f64::EPSILON * expected,
            "cell {i}: {dv} != {expected}"
        );
    }
    assert!((factors.total_volume(&grid) - 124.0 / 3.0).abs() < TOL);
}

#[test]
fn test_volumes_positive_in_every_geometry() {
    for dimensions in 1..=3 {
        let grid = radial_grid(dimensions);
        for geometry in Geometry::ALL {
            let factors = GeometricFactors::compute(&grid, geometry);
            let all = IndexRange3D::full(grid.extents());
            for (k, j, i) in all.iter() {
                let dv = factors.volume(k, j, i);
                assert!(
                    dv > 0.0 && dv.is_finite(),
                    "{geometry} {dimensions}D volume at ({k}, {j}, {i}) = {dv}"
                );
            }
        }
    }
}

/// Divergence of a radial face flux `f(r)` through the update routine.
fn radial_divergence(grid: &Grid, geometry: Geometry, f: impl Fn(f64) -> f64) -> Array4 {
    let factors = GeometricFactors::compute(grid, geometry);
    let mut sweep = SweepOutput::new(1, grid.extents(), Axis::I);
    let r = grid.axis(Axis::I);
    for (k, j, i) in IndexRange3D::full(sweep.cmax.extents()).iter() {
        let radius = r.face_position(FaceIndex::new(i));
        sweep.flux.set(0, k, j, i, f(radius));
    }

    let mut rhs = Array4::new(1, grid.extents());
    accumulate_flux_divergence(&mut rhs, &sweep, &factors, &grid.interior());
    rhs
}

#[test]
fn test_divergence_free_radial_fields() {
    // F_r = r^-p with p the number of curved directions
    let cases = [
        (Geometry::Cartesian, 0),
        (Geometry::Cylindrical, 1),
        (Geometry::Polar, 1),
        (Geometry::Spherical, 2),
    ];
    for dimensions in 1..=3 {
        let grid = radial_grid(dimensions);
        for (geometry, p) in cases {
            let rhs = radial_divergence(&grid, geometry, |r| r.powi(-p));
            for (k, j, i) in grid.interior().iter() {
                let div = rhs.get(0, k, j, i);
                assert!(div.abs() < 1e-10, "{geometry} {dimensions}D: {div}");
            }
        }
    }
}

#[test]
fn test_linear_radial_field_divergence() {
    // div(r e_r) = number of dimensions the radius spans
    let cases = [
        (Geometry::Cartesian, 1.0),
        (Geometry::Cylindrical, 2.0),
        (Geometry::Polar, 2.0),
        (Geometry::Spherical, 3.0),
    ];
    let grid = radial_grid(2);
    for (geometry, expected) in cases {
        let rhs = radial_divergence(&grid, geometry, |r| r);
        for (k, j, i) in grid.interior().iter() {
            assert!(
                (rhs.get(0, k, j, i) + expected).abs() < 1e-10,
                "{geometry}: {}",
                rhs.get(0, k, j, i)
            );
        }
    }
}

#[test]
fn test_two_subdomains_reproduce_global_factors() {
    let global = Grid::two_d(
        GridAxis::logarithmic(1.0, 8.0, 12, 2).unwrap(),
        GridAxis::uniform(0.25 * PI, 0.75 * PI, 6, 2).unwrap(),
    )
    .unwrap();

    for geometry in Geometry::ALL {
        let global_factors = GeometricFactors::compute(&global, geometry);

        for (begin, size) in [(0, 5), (5, 7)] {
            let sub = global.subdomain([begin, 0, 0], [size, 6, 1]).unwrap();
            let sub_factors = GeometricFactors::compute(&sub, geometry);

            for dir in [Axis::I, Axis::J] {
                for (k, j, i) in sub.interior().face_range(dir).iter() {
                    let a_sub = sub_factors.area(dir, k, j, i);
                    let a_global = global_factors.area(dir, k, j, i + begin);
                    assert!(
                        (a_sub - a_global).abs() <= TOL * a_global.abs().max(1.0),
                        "{geometry} {dir} face ({k}, {j}, {i}) of subdomain at {begin}"
                    );
                }
            }
            for (k, j, i) in sub.interior().iter() {
                let dv_sub = sub_factors.volume(k, j, i);
                let dv_global = global_factors.volume(k, j, i + begin);
                assert!((dv_sub - dv_global).abs() <= TOL * dv_global);
            }
        }
    }
}
