//! Curve model implementations.
//!
//! Models are implemented as small, pure functions so the controller, the CLI
//! and the exporters can share them.

pub mod logistic;

pub use logistic::*;
