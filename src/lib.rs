//! `logistic-curves` library crate.
//!
//! The binary (`logistic`) is a thin wrapper around this library so that:
//!
//! - the curve math and the controller are testable without a terminal
//! - the one-shot commands and the TUI share one code path
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod config;
pub mod controls;
pub mod debug;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod math;
pub mod models;
pub mod plot;
pub mod report;
pub mod tui;
