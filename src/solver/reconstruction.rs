//! Face states from cell-centred primitive variables.
//!
//! Face `f` along a direction lies between cells `f - 1` and `f`. The left
//! state of a face is extrapolated from cell `f - 1`, the right state from
//! cell `f`. The outermost faces have a cell on one side only and reuse it
//! for both states.

use std::fmt;

use crate::field::Array4;
use crate::types::Axis;

/// Slope limiter of the piecewise-linear reconstruction.
///
/// Each limiter takes the left and right undivided differences of a cell
/// and returns zero at extrema (arguments of opposite sign).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SlopeLimiter {
    /// Smallest of the two slopes
    Minmod,
    /// Harmonic mean of the two slopes
    #[default]
    VanLeer,
    /// Monotonized central: min(2|a|, 2|b|, |a + b| / 2)
    MonotonizedCentral,
}

impl SlopeLimiter {
    /// Limited slope from the left and right differences.
    #[inline(always)]
    pub fn limit(self, dl: f64, dr: f64) -> f64 {
        if dl * dr <= 0.0 {
            return 0.0;
        }
        match self {
            SlopeLimiter::Minmod => dl.signum() * dl.abs().min(dr.abs()),
            SlopeLimiter::VanLeer => 2.0 * dl * dr / (dl + dr),
            SlopeLimiter::MonotonizedCentral => {
                let m = (2.0 * dl.abs()).min(2.0 * dr.abs()).min(0.5 * (dl + dr).abs());
                dl.signum() * m
            }
        }
    }

    /// Parse a limiter name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "minmod" => Some(SlopeLimiter::Minmod),
            "vanleer" => Some(SlopeLimiter::VanLeer),
            "mc" => Some(SlopeLimiter::MonotonizedCentral),
            _ => None,
        }
    }

    /// Name as used in parameter files.
    pub fn name(&self) -> &'static str {
        match self {
            SlopeLimiter::Minmod => "minmod",
            SlopeLimiter::VanLeer => "vanleer",
            SlopeLimiter::MonotonizedCentral => "mc",
        }
    }
}

/// Reconstruction scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReconstructionScheme {
    /// First order: piecewise constant
    DonorCell,
    /// Second order: piecewise linear with a slope limiter
    Linear(SlopeLimiter),
}

impl ReconstructionScheme {
    /// Ghost cells needed on each side of an active axis.
    pub fn required_ghosts(&self) -> usize {
        match self {
            ReconstructionScheme::DonorCell => 1,
            ReconstructionScheme::Linear(_) => 2,
        }
    }
}

impl Default for ReconstructionScheme {
    fn default() -> Self {
        ReconstructionScheme::Linear(SlopeLimiter::default())
    }
}

impl fmt::Display for ReconstructionScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReconstructionScheme::DonorCell => f.write_str("donor cell"),
            ReconstructionScheme::Linear(l) => write!(f, "linear ({})", l.name()),
        }
    }
}

/// Left and right primitive states on every face normal to `direction`.
///
/// Both arrays have the cell extents grown by one along `direction`.
#[derive(Clone, Debug)]
pub struct Reconstruction {
    /// Direction of the faces
    pub direction: Axis,
    /// State on the left of each face
    pub prim_l: Array4,
    /// State on the right of each face
    pub prim_r: Array4,
}

impl Reconstruction {
    /// Reconstruct with the given scheme.
    pub fn compute(vc: &Array4, direction: Axis, scheme: ReconstructionScheme) -> Self {
        match scheme {
            ReconstructionScheme::DonorCell => Self::donor_cell(vc, direction),
            ReconstructionScheme::Linear(limiter) => {
                Self::piecewise_linear(vc, direction, limiter)
            }
        }
    }

    /// First-order reconstruction: face states equal the adjacent cells.
    pub fn donor_cell(vc: &Array4, direction: Axis) -> Self {
        Self::build(vc, direction, |_, _, _, _| 0.0)
    }

    /// Second-order reconstruction with limited slopes.
    ///
    /// The first and last cell along `direction` get a zero slope.
    pub fn piecewise_linear(vc: &Array4, direction: Axis, limiter: SlopeLimiter) -> Self {
        let n = vc.extents().along(direction);
        Self::build(vc, direction, |nv, k, j, i| {
            let c = along(direction, k, j, i);
            if c == 0 || c + 1 >= n {
                return 0.0;
            }
            let (km, jm, im) = shift(direction, k, j, i, -1);
            let (kp, jp, ip) = shift(direction, k, j, i, 1);
            let v = vc.get(nv, k, j, i);
            limiter.limit(v - vc.get(nv, km, jm, im), vc.get(nv, kp, jp, ip) - v)
        })
    }

    /// Fill both face arrays from a per-cell slope.
    ///
    /// Cells without two neighbours along `direction` must get a zero slope.
    fn build<S>(vc: &Array4, direction: Axis, slope: S) -> Self
    where
        S: Fn(usize, usize, usize, usize) -> f64,
    {
        let nvar = vc.nvar();
        let cells = vc.extents();
        let n = cells.along(direction);
        let faces = cells.with_faces(direction);

        let mut prim_l = Array4::new(nvar, faces);
        let mut prim_r = Array4::new(nvar, faces);

        for nv in 0..nvar {
            for k in 0..faces.nk {
                for j in 0..faces.nj {
                    for i in 0..faces.ni {
                        let f = along(direction, k, j, i);
                        // Cells on each side, clamped at the outermost faces
                        let (kl, jl, il) = if f == 0 {
                            (k, j, i)
                        } else {
                            shift(direction, k, j, i, -1)
                        };
                        let (kr, jr, ir) = if f == n {
                            shift(direction, k, j, i, -1)
                        } else {
                            (k, j, i)
                        };

                        let vl = vc.get(nv, kl, jl, il) + 0.5 * slope(nv, kl, jl, il);
                        let vr = vc.get(nv, kr, jr, ir) - 0.5 * slope(nv, kr, jr, ir);

                        prim_l.set(nv, k, j, i, vl);
                        prim_r.set(nv, k, j, i, vr);
                    }
                }
            }
        }

        Self {
            direction,
            prim_l,
            prim_r,
        }
    }
}

/// Index of (k, j, i) along `axis`.
#[inline(always)]
fn along(axis: Axis, k: usize, j: usize, i: usize) -> usize {
    match axis {
        Axis::I => i,
        Axis::J => j,
        Axis::K => k,
    }
}

/// Move (k, j, i) by `delta` along `axis`.
#[inline(always)]
fn shift(axis: Axis, k: usize, j: usize, i: usize, delta: isize) -> (usize, usize, usize) {
    let step = |x: usize| x.wrapping_add_signed(delta);
    match axis {
        Axis::I => (k, j, step(i)),
        Axis::J => (k, step(j), i),
        Axis::K => (step(k), j, i),
    }
}
