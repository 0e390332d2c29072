//! Grid axis arrays.
//!
//! A grid axis is a partition of an interval [x_start, x_end] into interior
//! cells, padded on both sides by ghost cells that continue the spacing.
//! All arrays cover the ghost-extended range and are indexed by the total
//! cell index (ghosts included).

use thiserror::Error;

use crate::types::{CellIndex, FaceIndex};

/// Error type for grid construction.
///
/// Malformed coordinates are rejected here; nothing downstream (geometry,
/// Riemann solver) re-validates them.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GridError {
    /// Axis without interior cells.
    #[error("Grid axis needs at least one interior cell")]
    EmptyAxis,

    /// Non-finite interval bounds.
    #[error("Grid bounds must be finite: [{start}, {end}]")]
    NonFiniteBounds { start: f64, end: f64 },

    /// Interval end not larger than start.
    #[error("Grid end {end} must be greater than start {start}")]
    InvertedBounds { start: f64, end: f64 },

    /// Face positions not strictly increasing.
    #[error("Face positions must be strictly increasing (violated at face {index})")]
    NonIncreasingFaces { index: usize },

    /// Logarithmic spacing requires a positive start.
    #[error("Logarithmic grid requires 0 < start, got start = {start}")]
    InvalidLogBounds { start: f64 },

    /// Subdomain does not fit in the parent axis.
    #[error("Subdomain [{begin}, {begin}+{size}) exceeds {available} interior cells")]
    SubdomainOutOfRange {
        begin: usize,
        size: usize,
        available: usize,
    },

    /// Unsupported number of dimensions.
    #[error("Grid dimensions must be 1, 2 or 3, got {0}")]
    InvalidDimensions(usize),

    /// An axis beyond the problem dimensionality is not a single unit cell.
    #[error("Axis X{axis} is inactive and must be a single cell without ghosts")]
    InactiveAxisNotCollapsed { axis: usize },
}

/// Coordinate arrays of one grid axis.
#[derive(Clone, Debug, PartialEq)]
pub struct GridAxis {
    /// Cell centres
    pub x: Vec<f64>,
    /// Cell widths: dx[i] = xr[i] - xl[i]
    pub dx: Vec<f64>,
    /// Left face positions
    pub xl: Vec<f64>,
    /// Right face positions (xr[i] == xl[i + 1])
    pub xr: Vec<f64>,
    /// Ghost cells on each side
    pub n_ghost: usize,
    /// Number of interior cells
    pub n_interior: usize,
}

impl GridAxis {
    /// Uniform axis of `n_interior` cells on [x_start, x_end].
    pub fn uniform(
        x_start: f64,
        x_end: f64,
        n_interior: usize,
        n_ghost: usize,
    ) -> Result<Self, GridError> {
        check_bounds(x_start, x_end, n_interior)?;

        let dx = (x_end - x_start) / n_interior as f64;
        let n_total = n_interior + 2 * n_ghost;
        let faces: Vec<f64> = (0..=n_total)
            .map(|f| x_start + (f as f64 - n_ghost as f64) * dx)
            .collect();

        Ok(Self::from_total_faces(&faces, n_ghost))
    }

    /// Logarithmically stretched axis: dx[i+1] / dx[i] is constant.
    ///
    /// Ghost cells continue the geometric progression.
    pub fn logarithmic(
        x_start: f64,
        x_end: f64,
        n_interior: usize,
        n_ghost: usize,
    ) -> Result<Self, GridError> {
        check_bounds(x_start, x_end, n_interior)?;
        if x_start <= 0.0 {
            return Err(GridError::InvalidLogBounds { start: x_start });
        }

        let ratio = (x_end / x_start).powf(1.0 / n_interior as f64);
        let n_total = n_interior + 2 * n_ghost;
        let faces: Vec<f64> = (0..=n_total)
            .map(|f| x_start * ratio.powf(f as f64 - n_ghost as f64))
            .collect();

        Ok(Self::from_total_faces(&faces, n_ghost))
    }

    /// Axis from the `n_interior + 1` interior face positions.
    ///
    /// Ghost cells mirror the width of the first and last interior cell.
    pub fn from_faces(faces: &[f64], n_ghost: usize) -> Result<Self, GridError> {
        if faces.len() < 2 {
            return Err(GridError::EmptyAxis);
        }
        if let Some(bad) = faces.iter().position(|f| !f.is_finite()) {
            return Err(GridError::NonFiniteBounds {
                start: faces[0],
                end: faces[bad],
            });
        }
        if let Some(index) = faces.windows(2).position(|w| w[1] <= w[0]) {
            return Err(GridError::NonIncreasingFaces { index: index + 1 });
        }

        let n = faces.len() - 1;
        let d_first = faces[1] - faces[0];
        let d_last = faces[n] - faces[n - 1];

        let mut all = Vec::with_capacity(faces.len() + 2 * n_ghost);
        all.extend((0..n_ghost).rev().map(|m| faces[0] - (m + 1) as f64 * d_first));
        all.extend_from_slice(faces);
        all.extend((0..n_ghost).map(|m| faces[n] + (m + 1) as f64 * d_last));

        Ok(Self::from_total_faces(&all, n_ghost))
    }

    /// Collapsed axis for directions beyond the problem dimensionality.
    ///
    /// A single cell of unit width on [0, 1] without ghosts.
    pub fn inactive() -> Self {
        Self::from_total_faces(&[0.0, 1.0], 0)
    }

    /// Build the arrays from ghost-extended face positions.
    fn from_total_faces(faces: &[f64], n_ghost: usize) -> Self {
        let n_total = faces.len() - 1;
        let xl = faces[..n_total].to_vec();
        let xr = faces[1..].to_vec();
        let dx = xl.iter().zip(&xr).map(|(l, r)| r - l).collect();
        let x = xl.iter().zip(&xr).map(|(l, r)| 0.5 * (l + r)).collect();

        Self {
            x,
            dx,
            xl,
            xr,
            n_ghost,
            n_interior: n_total - 2 * n_ghost,
        }
    }

    /// Ghost-extended axis of a subdomain.
    ///
    /// `begin` counts interior cells of this axis. The ghost cells of the
    /// subdomain are the neighbouring interior (or ghost) cells of the parent,
    /// as a halo exchange would fill them.
    pub fn subdomain(&self, begin: usize, size: usize) -> Result<Self, GridError> {
        if size == 0 || begin + size > self.n_interior {
            return Err(GridError::SubdomainOutOfRange {
                begin,
                size,
                available: self.n_interior,
            });
        }

        // In total indexing the subdomain spans [begin, begin + size + 2 ng)
        let lo = begin;
        let hi = begin + size + 2 * self.n_ghost;
        let mut faces = self.xl[lo..hi].to_vec();
        faces.push(self.xr[hi - 1]);

        Ok(Self::from_total_faces(&faces, self.n_ghost))
    }

    /// Total number of cells, ghosts included.
    #[inline]
    pub fn n_total(&self) -> usize {
        self.x.len()
    }

    /// Index of the first interior cell.
    #[inline]
    pub fn begin(&self) -> usize {
        self.n_ghost
    }

    /// One past the last interior cell.
    #[inline]
    pub fn end(&self) -> usize {
        self.n_ghost + self.n_interior
    }

    /// Interior cell indices.
    pub fn interior_cells(&self) -> impl ExactSizeIterator<Item = CellIndex> {
        CellIndex::range_iter(self.begin(), self.end())
    }

    /// Position of a face; face `n_total` is the right face of the last cell.
    #[inline]
    pub fn face_position(&self, face: FaceIndex) -> f64 {
        let f = face.get();
        if f == self.n_total() {
            self.xr[f - 1]
        } else {
            self.xl[f]
        }
    }

    /// Centre of a cell.
    #[inline]
    pub fn cell_center(&self, cell: CellIndex) -> f64 {
        self.x[cell.get()]
    }

    /// Left edge of the interior domain.
    pub fn x_start(&self) -> f64 {
        self.xl[self.begin()]
    }

    /// Right edge of the interior domain.
    pub fn x_end(&self) -> f64 {
        self.xr[self.end() - 1]
    }

    /// Minimum interior cell width.
    pub fn dx_min(&self) -> f64 {
        self.dx[self.begin()..self.end()]
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min)
    }
}

fn check_bounds(x_start: f64, x_end: f64, n_interior: usize) -> Result<(), GridError> {
    if n_interior == 0 {
        return Err(GridError::EmptyAxis);
    }
    if !x_start.is_finite() || !x_end.is_finite() {
        return Err(GridError::NonFiniteBounds {
            start: x_start,
            end: x_end,
        });
    }
    if x_end <= x_start {
        return Err(GridError::InvertedBounds {
            start: x_start,
            end: x_end,
        });
    }
    Ok(())
}
