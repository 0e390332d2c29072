//! Geometric factors of a structured grid in curvilinear coordinates.
//!
//! For every cell the finite-volume update needs the cell volume, the areas
//! of the faces bounding it and the geometric (centroid) position of the cell
//! centre. These depend on the coordinate system:
//!
//! | Geometry      | x1 | x2    | x3  |
//! |---------------|----|-------|-----|
//! | Cartesian     | x  | y     | z   |
//! | Cylindrical   | R  | z     | -   |
//! | Polar         | R  | phi   | z   |
//! | Spherical     | r  | theta | phi |
//!
//! Areas and volumes are built so that the discrete divergence telescopes
//! exactly: the flux through a face shared by two cells uses the same area on
//! both sides, and for radial fields the face areas difference reproduces the
//! analytic volume.
//!
//! Axes beyond the problem dimensionality contribute a unit factor.
//!
//! # Example
//! ```
//! use fv_mhd::geometry::{Geometry, GeometricFactors};
//! use fv_mhd::mesh::{Grid, GridAxis};
//!
//! let r = GridAxis::from_faces(&[1.0, 2.0, 3.0], 0).unwrap();
//! let grid = Grid::one_d(r).unwrap();
//! let geom = GeometricFactors::compute(&grid, Geometry::Spherical);
//! assert!((geom.cell_volume.get(0, 0, 0) - 7.0 / 3.0).abs() < 1e-14);
//! ```

mod cartesian;
mod cylindrical;
mod factors;
mod polar;
mod spherical;

pub use cartesian::Cartesian;
pub use cylindrical::Cylindrical;
pub use factors::GeometricFactors;
pub use polar::Polar;
pub use spherical::{Spherical, SphericalFactors};

use std::fmt;

use crate::mesh::Grid;
use crate::types::Axis;

/// Coordinate system of the grid.
///
/// Selected once when the domain is built.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Geometry {
    /// (x, y, z)
    #[default]
    Cartesian,
    /// (R, z), azimuth collapsed
    Cylindrical,
    /// (R, phi, z)
    Polar,
    /// (r, theta, phi)
    Spherical,
}

impl Geometry {
    /// All supported geometries.
    pub const ALL: [Geometry; 4] = [
        Geometry::Cartesian,
        Geometry::Cylindrical,
        Geometry::Polar,
        Geometry::Spherical,
    ];

    /// Lower-case name as used in parameter files.
    pub fn name(&self) -> &'static str {
        self.coordinate_system().name()
    }

    /// Parse a geometry name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|g| g.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Whether the radial direction is curved.
    pub fn is_curvilinear(&self) -> bool {
        !matches!(self, Geometry::Cartesian)
    }

    /// Strategy object computing the formulas of this geometry.
    pub fn coordinate_system(&self) -> &'static dyn CoordinateSystem {
        match self {
            Geometry::Cartesian => &Cartesian,
            Geometry::Cylindrical => &Cylindrical,
            Geometry::Polar => &Polar,
            Geometry::Spherical => &Spherical,
        }
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Volume, area and centroid formulas of one coordinate system.
///
/// Indices are total (ghost-included) indices. Face index `f` along `dir`
/// is the left face of cell `f`; `f == n_total` is the right face of the
/// last cell.
///
/// # Implementation Notes
///
/// - No runtime checks: the grid has been validated at construction.
/// - Radius differences enter through their absolute value.
pub trait CoordinateSystem: Send + Sync {
    /// Lower-case name.
    fn name(&self) -> &'static str;

    /// Volume of cell (k, j, i).
    fn cell_volume(&self, grid: &Grid, k: usize, j: usize, i: usize) -> f64;

    /// Area of the face normal to `dir` with index (k, j, i).
    fn face_area(&self, grid: &Grid, dir: Axis, k: usize, j: usize, i: usize) -> f64;

    /// Geometric centre of cell `index` along `axis`.
    ///
    /// Defaults to the arithmetic centre.
    fn geometric_center(&self, grid: &Grid, axis: Axis, index: usize) -> f64 {
        grid.axis(axis).x[index]
    }
}

/// Product of the factors of the active dimensions.
///
/// 1D: `a`; 2D: `a * b`; 3D: `a * b * c`.
#[inline(always)]
pub(crate) fn expand(dimensions: usize, a: f64, b: f64, c: f64) -> f64 {
    match dimensions {
        1 => a,
        2 => a * b,
        _ => a * b * c,
    }
}
