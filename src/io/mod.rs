//! I/O utilities.
//!
//! This module provides:
//! - **Parameter files**: block-structured `name value...` files read into
//!   an [`Input`], with typed access by block, name and position
//!
//! # Example
//!
//! ```
//! use fv_mhd::io::Input;
//!
//! let input = Input::parse("[Hydro]\ngamma 1.4  # adiabatic index\n").unwrap();
//! assert_eq!(input.get_real("Hydro", "gamma", 0).unwrap(), 1.4);
//! assert_eq!(input.check_entry("Hydro", "csiso"), None);
//! ```

mod input;

pub use input::{Input, InputError};
