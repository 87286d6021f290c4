//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - resolves configuration (defaults, environment, flags)
//! - installs logging
//! - dispatches to the TUI or to the one-shot commands

use std::path::Path;

use clap::Parser;
use tracing::info;

use crate::cli::{Command, CurveArgs, EvalArgs, ExportArgs, ExportFormat, PlotArgs};
use crate::config::Config;
use crate::error::AppError;
use crate::models::logistic;

pub mod controller;

pub use controller::{ControllerState, DisplayController};

/// Entry point for the `logistic` binary.
pub fn run() -> Result<(), AppError> {
    // We want `logistic` and `logistic -k 5` to behave like `logistic tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Tui(args) => handle_tui(args),
        Command::Eval(args) => handle_eval(args),
        Command::Plot(args) => handle_plot(args),
        Command::Export(args) => handle_export(args),
    }
}

fn resolve_config(args: &CurveArgs) -> Result<Config, AppError> {
    Ok(Config::from_env()?.with_args(args))
}

fn handle_tui(args: CurveArgs) -> Result<(), AppError> {
    let config = resolve_config(&args)?;
    crate::logging::init_file(&config.log_file)?;
    info!(params = %config.params, "starting tui");
    let result = crate::tui::run(&config);
    info!("tui closed");
    result
}

fn handle_eval(args: EvalArgs) -> Result<(), AppError> {
    crate::logging::init_stderr();
    let config = resolve_config(&args.curve)?;

    let xs = if args.xs.is_empty() {
        config.domain()?.xs().to_vec()
    } else {
        args.xs
    };
    let ys = logistic(&xs, &config.params)?;

    print!("{}", crate::report::format_eval_table(&config.params, &xs, &ys));
    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    crate::logging::init_stderr();

    let plot = match &args.curve_file {
        Some(path) => {
            let curve = crate::io::read_curve_json(path)?;
            crate::plot::render_ascii_plot_from_curve_file(&curve, args.width, args.height)
        }
        None => {
            let config = resolve_config(&args.curve)?;
            let controller = DisplayController::new(config.domain()?, config.params)?;
            crate::plot::render_ascii_plot(&controller.series(), args.width, args.height)
        }
    };

    println!("{plot}");
    Ok(())
}

fn handle_export(args: ExportArgs) -> Result<(), AppError> {
    crate::logging::init_stderr();
    let config = resolve_config(&args.curve)?;
    let controller = DisplayController::new(config.domain()?, config.params)?;
    export_series(&controller, &args.out, args.format)
}

/// Write the controller's published series in `format`.
pub fn export_series(controller: &DisplayController, path: &Path, format: ExportFormat) -> Result<(), AppError> {
    let series = controller.series();
    match format {
        ExportFormat::Json => crate::io::write_curve_json(path, &series, controller.domain()),
        ExportFormat::Csv => crate::io::write_series_csv(path, &series),
    }
}

/// Rewrite argv so `logistic` defaults to `logistic tui`.
///
/// Rules:
/// - `logistic`                      -> `logistic tui`
/// - `logistic -k 5 ...`             -> `logistic tui -k 5 ...`
/// - `logistic --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "tui" | "eval" | "plot" | "export");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_launches_tui() {
        assert_eq!(rewrite_args(argv(&["logistic"])), argv(&["logistic", "tui"]));
    }

    #[test]
    fn leading_flags_are_tui_flags() {
        assert_eq!(
            rewrite_args(argv(&["logistic", "-k", "5"])),
            argv(&["logistic", "tui", "-k", "5"])
        );
    }

    #[test]
    fn subcommands_and_help_pass_through() {
        assert_eq!(rewrite_args(argv(&["logistic", "eval"])), argv(&["logistic", "eval"]));
        assert_eq!(rewrite_args(argv(&["logistic", "-V"])), argv(&["logistic", "-V"]));
    }

    #[test]
    fn export_series_writes_requested_format() {
        let controller = DisplayController::new(
            crate::domain::SampleDomain::new(-2.0, 2.0, 5).unwrap(),
            crate::domain::Params::default(),
        )
        .unwrap();
        let dir = tempfile::tempdir().unwrap();

        let csv = dir.path().join("s.csv");
        export_series(&controller, &csv, ExportFormat::Csv).unwrap();
        assert_eq!(std::fs::read_to_string(&csv).unwrap().lines().count(), 6);

        let json = dir.path().join("s.json");
        export_series(&controller, &json, ExportFormat::Json).unwrap();
        let back = crate::io::read_curve_json(&json).unwrap();
        assert_eq!(back.series.x, controller.series().x);
    }
}
