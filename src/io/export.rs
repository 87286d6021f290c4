//! Export a curve series to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::domain::CurveSeries;
use crate::error::AppError;

/// Write `series` as `x,y` rows.
pub fn write_series_csv(path: &Path, series: &CurveSeries) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::io(format!("Failed to create export CSV '{}': {e}", path.display())))?;
    write_series(file, series)?;
    info!(path = %path.display(), samples = series.len(), "wrote series csv");
    Ok(())
}

/// Write `series` as CSV to any writer.
pub fn write_series<W: Write>(mut out: W, series: &CurveSeries) -> Result<(), AppError> {
    writeln!(out, "x,y").map_err(|e| AppError::io(format!("Failed to write export CSV header: {e}")))?;
    for (x, y) in series.points() {
        writeln!(out, "{x:.10},{y:.10}")
            .map_err(|e| AppError::io(format!("Failed to write export CSV row: {e}")))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Params;

    #[test]
    fn csv_has_header_and_one_row_per_sample() {
        let series = CurveSeries {
            params: Params::default(),
            x: vec![-1.0, 0.0, 1.0],
            y: vec![0.25, 0.5, 0.75],
        };
        let mut buf = Vec::new();
        write_series(&mut buf, &series).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "x,y");
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2], "0.0000000000,0.5000000000");
    }
}
