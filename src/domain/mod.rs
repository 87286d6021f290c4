//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - the five curve parameters (`ParamName`, `Params`) and their slider ranges (`SliderSpec`)
//! - the fixed x-domain (`SampleDomain`)
//! - the computed series (`CurveSeries`) and control events (`ValueChanged`)

pub mod types;

pub use types::*;
