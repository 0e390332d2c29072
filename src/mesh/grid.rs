//! Structured grid: three axes and a problem dimensionality.

use crate::types::{Axis, Extents3D, IndexRange3D};

use super::{GridAxis, GridError};

/// Logically rectangular grid of up to three dimensions.
///
/// Axes beyond `dimensions` are collapsed to [`GridAxis::inactive`], so the
/// storage is always 3D and loops over inactive axes run once.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    axes: [GridAxis; 3],
    dimensions: usize,
}

impl Grid {
    /// Create a grid from three axes.
    ///
    /// # Errors
    /// Rejects dimensions outside 1..=3 and inactive axes that are not a
    /// single cell without ghosts.
    pub fn new(axes: [GridAxis; 3], dimensions: usize) -> Result<Self, GridError> {
        if !(1..=3).contains(&dimensions) {
            return Err(GridError::InvalidDimensions(dimensions));
        }
        for (d, axis) in axes.iter().enumerate().skip(dimensions) {
            if axis.n_total() != 1 || axis.n_ghost != 0 {
                return Err(GridError::InactiveAxisNotCollapsed { axis: d + 1 });
            }
        }
        Ok(Self { axes, dimensions })
    }

    /// 1D grid along x1.
    pub fn one_d(x1: GridAxis) -> Result<Self, GridError> {
        Self::new([x1, GridAxis::inactive(), GridAxis::inactive()], 1)
    }

    /// 2D grid in (x1, x2).
    pub fn two_d(x1: GridAxis, x2: GridAxis) -> Result<Self, GridError> {
        Self::new([x1, x2, GridAxis::inactive()], 2)
    }

    /// 3D grid.
    pub fn three_d(x1: GridAxis, x2: GridAxis, x3: GridAxis) -> Result<Self, GridError> {
        Self::new([x1, x2, x3], 3)
    }

    /// All three axes, in (x1, x2, x3) order.
    #[inline(always)]
    pub fn axes(&self) -> &[GridAxis; 3] {
        &self.axes
    }

    /// One axis.
    #[inline(always)]
    pub fn axis(&self, axis: Axis) -> &GridAxis {
        &self.axes[axis.index()]
    }

    /// Problem dimensionality.
    #[inline(always)]
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Whether `axis` is within the problem dimensionality.
    #[inline]
    pub fn is_active(&self, axis: Axis) -> bool {
        axis.index() < self.dimensions
    }

    /// Active axes in sweep order.
    pub fn active_axes(&self) -> impl Iterator<Item = Axis> + '_ {
        Axis::ALL.into_iter().filter(|a| self.is_active(*a))
    }

    /// Storage extents of cell-centred arrays (ghosts included).
    pub fn extents(&self) -> Extents3D {
        let [x1, x2, x3] = &self.axes;
        Extents3D::new(x3.n_total(), x2.n_total(), x1.n_total())
    }

    /// Interior cell range.
    pub fn interior(&self) -> IndexRange3D {
        let [x1, x2, x3] = &self.axes;
        IndexRange3D::new(
            [x1.begin(), x1.end()],
            [x2.begin(), x2.end()],
            [x3.begin(), x3.end()],
        )
    }

    /// Number of interior cells.
    pub fn n_interior_cells(&self) -> usize {
        self.axes.iter().map(|a| a.n_interior).product()
    }

    /// Ghost-extended grid of the subdomain starting at interior cell
    /// `begin` with `size` interior cells per axis (I, J, K order).
    pub fn subdomain(&self, begin: [usize; 3], size: [usize; 3]) -> Result<Self, GridError> {
        let [x1, x2, x3] = &self.axes;
        let axes = [
            x1.subdomain(begin[0], size[0])?,
            x2.subdomain(begin[1], size[1])?,
            x3.subdomain(begin[2], size[2])?,
        ];
        Self::new(axes, self.dimensions)
    }
}
