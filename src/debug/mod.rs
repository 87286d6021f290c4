//! Debug bundle writer for inspecting the controller state and the published series.

use std::fs::{File, create_dir_all};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::info;

use crate::app::controller::DisplayController;
use crate::domain::ParamName;
use crate::error::AppError;

/// Write a markdown bundle under `<root>/debug/` and return its path.
pub fn write_debug_bundle(root: &Path, controller: &DisplayController) -> Result<PathBuf, AppError> {
    let dir = root.join("debug");
    create_dir_all(&dir).map_err(|e| AppError::io(format!("Failed to create debug dir: {e}")))?;

    let ts = Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("logistic_debug_{ts}.md"));

    let body = render_debug_bundle(controller);
    let mut file = File::create(&path)
        .map_err(|e| AppError::io(format!("Failed to create debug file: {e}")))?;
    file.write_all(body.as_bytes())
        .map_err(|e| AppError::io(format!("Failed to write debug file: {e}")))?;

    info!(path = %path.display(), "wrote debug bundle");
    Ok(path)
}

/// Markdown body of the debug bundle.
pub fn render_debug_bundle(controller: &DisplayController) -> String {
    let params = controller.params();
    let series = controller.series();
    let domain = controller.domain();

    let mut out = String::new();
    out.push_str("# logistic debug bundle\n");
    out.push_str(&format!("- generated: {}\n", Local::now().to_rfc3339()));
    out.push_str(&format!(
        "- domain: [{:.3}, {:.3}] n={}\n",
        domain.min(),
        domain.max(),
        domain.len()
    ));
    out.push_str(&format!("- recomputes: {}\n", controller.recompute_count()));
    let validation = match params.validate() {
        Ok(()) => "ok".to_string(),
        Err(err) => err.to_string(),
    };
    out.push_str(&format!("- validation: {validation}\n"));
    out.push_str(&format!("- series current: {}\n", controller.is_current()));

    out.push_str("\n## Parameters\n");
    out.push_str("| name | value | series value | min | max | step |\n");
    out.push_str("| - | - | - | - | - | - |\n");
    for name in ParamName::ALL {
        let spec = name.spec();
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} |\n",
            name,
            params.get(name),
            series.params.get(name),
            spec.min,
            spec.max,
            spec.step
        ));
    }

    out.push_str("\n## Series\n");
    out.push_str("| i | x | y |\n");
    out.push_str("| - | - | - |\n");
    for (i, (x, y)) in series.points().enumerate() {
        out.push_str(&format!("| {i} | {x:.6} | {y:.9} |\n"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Params, SampleDomain, ValueChanged};

    #[test]
    fn bundle_reports_rejected_parameters() {
        let domain = SampleDomain::new(-1.0, 1.0, 3).unwrap();
        let mut controller = DisplayController::new(domain, Params::default()).unwrap();
        let _ = controller.on_change(ValueChanged { name: ParamName::V, old: 1.0, new: 0.0 });

        let body = render_debug_bundle(&controller);
        assert!(body.contains("- validation: Parameter 'v' must be positive: [v=0]"));
        assert!(body.contains("- series current: false"));
        assert!(body.contains("| 2 | 1.000000 |"));
        assert!(body.contains("| v | 0 | 1 | 0.01 | 5 | 0.1 |\n"));
        assert!(body.contains("\n## Series\n| i | x | y |\n"));
    }

    #[test]
    fn bundle_is_written_under_debug_dir() {
        let dir = tempfile::tempdir().unwrap();
        let controller = DisplayController::new(SampleDomain::default(), Params::default()).unwrap();
        let path = write_debug_bundle(dir.path(), &controller).unwrap();
        assert!(path.starts_with(dir.path().join("debug")));
        assert!(std::fs::read_to_string(path).unwrap().starts_with("# logistic debug bundle"));
    }
}
