//! Strongly-typed index and direction types.
//!
//! These types keep the three logical grid axes, their sweep mappings and
//! the 3D loop bounds explicit in every API that walks the grid.
//!
//! # Example
//!
//! ```
//! use fv_mhd::types::{Axis, Extents3D, IndexRange3D, SweepAxes};
//!
//! let sweep = SweepAxes::for_direction(Axis::J);
//! assert_eq!(sweep.normal, Axis::J);
//! assert_eq!(sweep.tangential_1, Axis::I);
//!
//! let extents = Extents3D::new(1, 8, 8);
//! let interior = IndexRange3D::new([2, 6], [2, 6], [0, 1]);
//! assert_eq!(interior.face_range(Axis::I).len(Axis::I), 5);
//! assert_eq!(extents.len(), 64);
//! ```

mod axis;
mod extents;
mod indices;

pub use axis::{Axis, SweepAxes};
pub use extents::{Extents3D, IndexRange3D};
pub use indices::{CellIndex, FaceIndex};
