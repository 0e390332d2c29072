//! Dense structure-of-arrays storage for grid fields.
//!
//! Scalar fields use [`Array3`]; multi-variable fields (primitive states,
//! fluxes) use the variable-major [`Array4`], so each variable is a
//! contiguous 3D block.

mod array;

pub use array::{Array3, Array4};
