//! Logical grid directions and the normal/tangential mapping of a sweep.

use std::fmt;

/// One of the three logical axes of a structured grid.
///
/// The physical meaning depends on the geometry: for spherical grids
/// `I` is the radius, `J` the polar angle and `K` the azimuth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// First direction (x1)
    I,
    /// Second direction (x2)
    J,
    /// Third direction (x3)
    K,
}

impl Axis {
    /// All axes in storage order.
    pub const ALL: [Axis; 3] = [Axis::I, Axis::J, Axis::K];

    /// Zero-based position of the axis (0 for `I`).
    #[inline(always)]
    pub const fn index(self) -> usize {
        match self {
            Axis::I => 0,
            Axis::J => 1,
            Axis::K => 2,
        }
    }

    /// Axis from a zero-based position.
    ///
    /// # Panics
    /// Panics if `index > 2`.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Axis::I,
            1 => Axis::J,
            2 => Axis::K,
            _ => panic!("Invalid axis index {index}"),
        }
    }

    /// Active axes for a problem of the given dimensionality.
    pub fn active(dimensions: usize) -> impl Iterator<Item = Axis> {
        Self::ALL.into_iter().take(dimensions)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X{}", self.index() + 1)
    }
}

/// Normal and tangential axes of a sweep.
///
/// The Riemann solver only ever looks at vector components through this
/// mapping, so a single implementation serves all three sweep directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SweepAxes {
    /// Direction normal to the faces being swept
    pub normal: Axis,
    /// First tangential direction
    pub tangential_1: Axis,
    /// Second tangential direction
    pub tangential_2: Axis,
}

impl SweepAxes {
    /// Mapping used for a sweep along `direction`.
    ///
    /// I -> (I, J, K), J -> (J, I, K), K -> (K, I, J).
    #[inline]
    pub const fn for_direction(direction: Axis) -> Self {
        match direction {
            Axis::I => Self {
                normal: Axis::I,
                tangential_1: Axis::J,
                tangential_2: Axis::K,
            },
            Axis::J => Self {
                normal: Axis::J,
                tangential_1: Axis::I,
                tangential_2: Axis::K,
            },
            Axis::K => Self {
                normal: Axis::K,
                tangential_1: Axis::I,
                tangential_2: Axis::J,
            },
        }
    }
}
