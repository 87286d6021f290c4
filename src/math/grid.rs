//! Sample grid generation.
//!
//! The curve is always evaluated on a deterministic, evenly spaced grid so the
//! x-array never changes between recomputes.

use crate::error::AppError;

/// Generate `steps` evenly spaced points between `min` and `max` (inclusive).
pub fn linspace(min: f64, max: f64, steps: usize) -> Result<Vec<f64>, AppError> {
    if !(min.is_finite() && max.is_finite() && max > min) {
        return Err(AppError::config(format!(
            "Invalid x range: min={min}, max={max} (must be finite and max>min)."
        )));
    }
    if steps < 2 {
        return Err(AppError::config("Sample count must be >= 2."));
    }
    Ok(linspace_unchecked(min, max, steps))
}

/// `linspace` without argument checks. Callers guarantee `steps >= 2`.
pub(crate) fn linspace_unchecked(min: f64, max: f64, steps: usize) -> Vec<f64> {
    let step = (max - min) / (steps as f64 - 1.0);
    let mut out = Vec::with_capacity(steps);
    for i in 0..steps {
        out.push(min + step * i as f64);
    }
    // Pin the last point so rounding never overshoots the range.
    if let Some(last) = out.last_mut() {
        *last = max;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_includes_endpoints() {
        let v = linspace(-10.0, 10.0, 5).unwrap();
        assert_eq!(v, vec![-10.0, -5.0, 0.0, 5.0, 10.0]);
    }

    #[test]
    fn linspace_is_evenly_spaced() {
        let v = linspace(-10.0, 10.0, 100).unwrap();
        assert_eq!(v.len(), 100);
        let step = v[1] - v[0];
        for w in v.windows(2) {
            assert!((w[1] - w[0] - step).abs() < 1e-12);
        }
    }

    #[test]
    fn linspace_rejects_bad_ranges() {
        assert!(linspace(1.0, 1.0, 10).is_err());
        assert!(linspace(2.0, 1.0, 10).is_err());
        assert!(linspace(f64::NAN, 1.0, 10).is_err());
        assert!(linspace(0.0, 1.0, 1).is_err());
    }
}
