//! Structured grids.
//!
//! Provides the grid data structures of the finite-volume core:
//! - Per-axis coordinate arrays with ghost cells ([`GridAxis`])
//! - Up-to-3D grids with collapsed inactive axes ([`Grid`])
//! - A grid bundled with its geometric factors ([`Domain`])
//!
//! Malformed coordinates are rejected here with a [`GridError`].

mod axis;
mod domain;
mod grid;

pub use axis::{GridAxis, GridError};
pub use domain::Domain;
pub use grid::Grid;
