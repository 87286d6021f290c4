//! Read/write curve JSON files.
//!
//! Curve JSON is the "portable" representation of a computed curve:
//! - the five parameters
//! - the sample domain it was evaluated on
//! - the `(x, y)` series for quick re-plotting
//!
//! The schema is defined by `domain::CurveFile`.

use std::fs::File;
use std::path::Path;

use chrono::Utc;
use tracing::info;

use crate::domain::{CurveFile, CurveSeries, DomainSpec, SampleDomain, SeriesData};
use crate::error::AppError;

/// Build the file representation of `series`.
pub fn curve_file(series: &CurveSeries, domain: &SampleDomain) -> CurveFile {
    CurveFile {
        tool: "logistic".to_string(),
        generated_at: Utc::now(),
        params: series.params,
        domain: DomainSpec::from(domain),
        series: SeriesData {
            x: series.x.clone(),
            y: series.y.clone(),
        },
    }
}

/// Write a curve JSON file.
pub fn write_curve_json(path: &Path, series: &CurveSeries, domain: &SampleDomain) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::io(format!("Failed to create curve JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, &curve_file(series, domain))
        .map_err(|e| AppError::io(format!("Failed to write curve JSON: {e}")))?;

    info!(path = %path.display(), samples = series.len(), "wrote curve json");
    Ok(())
}

/// Read a curve JSON file.
pub fn read_curve_json(path: &Path) -> Result<CurveFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::io(format!("Failed to open curve JSON '{}': {e}", path.display())))?;
    let curve: CurveFile =
        serde_json::from_reader(file).map_err(|e| AppError::config(format!("Invalid curve JSON: {e}")))?;
    if curve.series.x.len() != curve.series.y.len() {
        return Err(AppError::config(format!(
            "Invalid curve JSON: x has {} values but y has {}.",
            curve.series.x.len(),
            curve.series.y.len()
        )));
    }
    Ok(curve)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Params;
    use crate::models::logistic;

    #[test]
    fn json_file_reloads_with_same_series() {
        let domain = SampleDomain::new(-5.0, 5.0, 11).unwrap();
        let params = Params { a: -1.0, k: 3.0, ..Params::default() };
        let series = CurveSeries {
            params,
            x: domain.xs().to_vec(),
            y: logistic(domain.xs(), &params).unwrap(),
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("curve.json");
        write_curve_json(&path, &series, &domain).unwrap();

        let back = read_curve_json(&path).unwrap();
        assert_eq!(back.tool, "logistic");
        assert_eq!(back.params, params);
        assert_eq!(back.domain.samples, 11);
        assert_eq!(back.series.x, series.x);
        assert_eq!(back.series.y, series.y);
    }

    #[test]
    fn mismatched_series_lengths_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        let json = r#"{
            "tool": "logistic",
            "generated_at": "2026-01-01T00:00:00Z",
            "params": {"a": 0.0, "k": 1.0, "q": 1.0, "b": 1.0, "v": 1.0},
            "domain": {"x_min": -1.0, "x_max": 1.0, "samples": 2},
            "series": {"x": [-1.0, 1.0], "y": [0.5]}
        }"#;
        std::fs::write(&path, json).unwrap();
        assert!(read_curve_json(&path).is_err());
    }
}
