//! Strongly-typed index newtypes.
//!
//! Cells and faces share integer index spaces along an axis (face `i` is the
//! left face of cell `i`), which makes them easy to mix up.

use std::fmt;

macro_rules! axis_index {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        pub struct $name(usize);

        impl $name {
            #[inline]
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            /// Raw position along the axis.
            #[inline]
            pub const fn get(self) -> usize {
                self.0
            }

            /// Indices of [start, end).
            pub fn range_iter(start: usize, end: usize) -> impl ExactSizeIterator<Item = $name> {
                (start..end).map($name)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $prefix, self.0)
            }
        }

        impl From<usize> for $name {
            #[inline]
            fn from(index: usize) -> Self {
                Self(index)
            }
        }
    };
}

axis_index!(
    /// Cell index along one grid axis, ghost cells included.
    ///
    /// ```
    /// use fv_mhd::types::CellIndex;
    ///
    /// assert_eq!(CellIndex::new(3).get(), 3);
    /// ```
    CellIndex,
    "C"
);

axis_index!(
    /// Face index along one grid axis.
    ///
    /// Face `i` separates cells `i - 1` and `i`, so an axis with `n` cells
    /// has faces `0..=n`.
    ///
    /// ```
    /// use fv_mhd::types::{CellIndex, FaceIndex};
    ///
    /// let cell = CellIndex::new(4);
    /// assert_eq!(FaceIndex::left_of(cell).get(), 4);
    /// assert_eq!(FaceIndex::right_of(cell).get(), 5);
    /// ```
    FaceIndex,
    "F"
);

impl FaceIndex {
    /// Left face of a cell.
    #[inline]
    pub const fn left_of(cell: CellIndex) -> Self {
        Self(cell.0)
    }

    /// Right face of a cell.
    #[inline]
    pub const fn right_of(cell: CellIndex) -> Self {
        Self(cell.0 + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefix() {
        assert_eq!(CellIndex::new(42).to_string(), "C42");
        assert_eq!(FaceIndex::from(10).to_string(), "F10");
    }

    #[test]
    fn test_range_iter() {
        let cells: Vec<usize> = CellIndex::range_iter(3, 7).map(CellIndex::get).collect();
        assert_eq!(cells, vec![3, 4, 5, 6]);
    }

    #[test]
    fn test_faces_bracket_cell() {
        let cell = CellIndex::new(2);
        assert_eq!(FaceIndex::right_of(cell).get(), FaceIndex::left_of(cell).get() + 1);
    }
}
