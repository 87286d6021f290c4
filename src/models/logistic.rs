//! Generalized logistic (Richards) curve.
//!
//! ```text
//! y(x) = a + (k - a) / (1 + q * exp(-b * x))^(1 / v)
//! ```
//!
//! `a` and `k` are the lower and upper asymptotes, `b` the growth rate, `q`
//! and `v` shape the position and asymmetry of the inflection point.

use crate::domain::Params;
use crate::error::CurveError;

impl Params {
    /// Check `a < k` and `v > 0`.
    ///
    /// Written as negated comparisons so NaN inputs are rejected too.
    pub fn validate(&self) -> Result<(), CurveError> {
        if !(self.a < self.k) {
            return Err(CurveError::invalid_parameter(format!(
                "Parameter 'k' must be greater than 'a': [a={}, k={}]",
                self.a, self.k
            )));
        }
        if !(self.v > 0.0) {
            return Err(CurveError::invalid_parameter(format!(
                "Parameter 'v' must be positive: [v={}]",
                self.v
            )));
        }
        Ok(())
    }
}

/// Evaluate the curve at a single point without validating `params`.
pub fn logistic_at(x: f64, params: &Params) -> f64 {
    let Params { a, k, q, b, v } = *params;
    a + (k - a) / (1.0 + q * (-b * x).exp()).powf(1.0 / v)
}

/// Evaluate the curve over `xs`.
///
/// Parameters are validated before any element is computed; the output has
/// the same length as `xs`.
pub fn logistic(xs: &[f64], params: &Params) -> Result<Vec<f64>, CurveError> {
    params.validate()?;
    Ok(xs.iter().map(|&x| logistic_at(x, params)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::linspace;

    fn sigmoid() -> Params {
        Params { a: 0.0, k: 1.0, q: 1.0, b: 1.0, v: 1.0 }
    }

    #[test]
    fn standard_sigmoid_values() {
        let xs = [-10.0, -5.0, 0.0, 5.0, 10.0];
        let ys = logistic(&xs, &sigmoid()).unwrap();
        let expected = [4.5398e-5, 6.6929e-3, 0.5, 0.993307, 0.9999546];
        for (y, e) in ys.iter().zip(expected) {
            assert!((y - e).abs() < 1e-6, "got {y}, expected {e}");
        }
    }

    #[test]
    fn output_length_matches_input() {
        for n in [2, 7, 100, 513] {
            let xs = linspace(-3.0, 3.0, n).unwrap();
            let params = Params { a: -4.0, k: 2.0, q: 0.3, b: 2.1, v: 0.4 };
            assert_eq!(logistic(&xs, &params).unwrap().len(), n);
        }
        assert!(logistic(&[], &sigmoid()).unwrap().is_empty());
    }

    #[test]
    fn approaches_asymptotes_on_wide_domain() {
        let params = Params { a: -3.0, k: 7.0, q: 2.0, b: 1.5, v: 0.5 };
        let ys = logistic(&[-200.0, 200.0], &params).unwrap();
        assert!((ys[0] - params.a).abs() < 1e-9, "left tail {}", ys[0]);
        assert!((ys[1] - params.k).abs() < 1e-9, "right tail {}", ys[1]);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let xs = linspace(-10.0, 10.0, 100).unwrap();
        let params = Params { a: -2.0, k: 5.0, q: 0.7, b: 0.9, v: 2.3 };
        assert_eq!(logistic(&xs, &params).unwrap(), logistic(&xs, &params).unwrap());
    }

    #[test]
    fn rejects_k_not_above_a() {
        let xs = [-1.0, 0.0, 1.0];
        let params = Params { a: 5.0, k: 3.0, q: 1.0, b: 1.0, v: 1.0 };
        let err = logistic(&xs, &params).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Parameter 'k' must be greater than 'a': [a=5, k=3]"
        );

        let equal = Params { a: 2.0, k: 2.0, ..params };
        assert!(logistic(&xs, &equal).is_err());
    }

    #[test]
    fn rejects_non_positive_v() {
        let xs = [-1.0, 0.0, 1.0];
        let params = Params { v: 0.0, ..sigmoid() };
        let err = logistic(&xs, &params).unwrap_err();
        assert_eq!(err.to_string(), "Parameter 'v' must be positive: [v=0]");
        assert!(logistic(&xs, &Params { v: -1.0, ..sigmoid() }).is_err());
    }

    #[test]
    fn asymptote_check_runs_before_shape_check() {
        let params = Params { a: 1.0, k: 0.0, q: 1.0, b: 1.0, v: 0.0 };
        let err = logistic(&[0.0], &params).unwrap_err();
        assert!(err.to_string().contains("'k' must be greater than 'a'"));
    }

    #[test]
    fn nan_parameters_are_rejected() {
        assert!(logistic(&[0.0], &Params { a: f64::NAN, ..sigmoid() }).is_err());
        assert!(logistic(&[0.0], &Params { v: f64::NAN, ..sigmoid() }).is_err());
    }

    #[test]
    fn q_shifts_value_at_origin() {
        // y(0) = a + (k - a) / (1 + q)^(1/v)
        let params = Params { q: 3.0, ..sigmoid() };
        let y0 = logistic_at(0.0, &params);
        assert!((y0 - 0.25).abs() < 1e-12);
    }
}
