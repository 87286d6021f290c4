//! Command-line parsing for the logistic curve explorer.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the curve math and the controller.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::domain::ParamName;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "logistic", version, about = "Generalized logistic (Richards) curve explorer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Launch the interactive slider UI (default).
    Tui(CurveArgs),
    /// Print `(x, y)` pairs for the given parameters.
    Eval(EvalArgs),
    /// Print an ASCII plot of the curve.
    Plot(PlotArgs),
    /// Write the curve series to a JSON or CSV file.
    Export(ExportArgs),
}

/// Curve parameters and sample domain.
///
/// Anything left unset falls back to the environment, then to the slider defaults.
#[derive(Debug, Args, Clone, Default)]
pub struct CurveArgs {
    /// Lower asymptote.
    #[arg(short = 'a', long, allow_negative_numbers = true)]
    pub a: Option<f64>,

    /// Upper asymptote.
    #[arg(short = 'k', long, allow_negative_numbers = true)]
    pub k: Option<f64>,

    /// Shape term affecting y at x=0.
    #[arg(short = 'q', long, allow_negative_numbers = true)]
    pub q: Option<f64>,

    /// Growth rate.
    #[arg(short = 'b', long, allow_negative_numbers = true)]
    pub b: Option<f64>,

    /// Shape term affecting where maximum growth occurs (must be positive).
    #[arg(short = 'v', long, allow_negative_numbers = true)]
    pub v: Option<f64>,

    /// Lower bound of the sample domain.
    #[arg(long, allow_negative_numbers = true)]
    pub x_min: Option<f64>,

    /// Upper bound of the sample domain.
    #[arg(long, allow_negative_numbers = true)]
    pub x_max: Option<f64>,

    /// Number of evenly spaced samples.
    #[arg(long)]
    pub samples: Option<usize>,
}

impl CurveArgs {
    pub fn param(&self, name: ParamName) -> Option<f64> {
        match name {
            ParamName::A => self.a,
            ParamName::K => self.k,
            ParamName::Q => self.q,
            ParamName::B => self.b,
            ParamName::V => self.v,
        }
    }
}

#[derive(Debug, Args, Clone)]
pub struct EvalArgs {
    #[command(flatten)]
    pub curve: CurveArgs,

    /// Evaluate at these x-values instead of the sample domain (repeatable).
    #[arg(long = "x", value_name = "X", allow_negative_numbers = true)]
    pub xs: Vec<f64>,
}

#[derive(Debug, Args, Clone)]
pub struct PlotArgs {
    #[command(flatten)]
    pub curve: CurveArgs,

    /// Plot a curve JSON produced by `logistic export` instead of computing one.
    #[arg(long = "from", value_name = "JSON")]
    pub curve_file: Option<PathBuf>,

    /// Plot width (columns).
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
}

#[derive(Debug, Args, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub curve: CurveArgs,

    /// Output path.
    #[arg(long, value_name = "PATH")]
    pub out: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
    pub format: ExportFormat,
}
