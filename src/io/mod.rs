//! Input/output helpers.
//!
//! - curve JSON read/write (`curve`)
//! - series CSV export (`export`)

pub mod curve;
pub mod export;

pub use curve::*;
pub use export::*;
