//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory by the controller and the TUI
//! - exported to JSON/CSV
//! - reloaded later for plotting

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::math::grid::linspace_unchecked;
use crate::math::linspace;

/// Default sample domain: `[-10, 10]` with 100 evenly spaced points.
pub const DEFAULT_X_MIN: f64 = -10.0;
pub const DEFAULT_X_MAX: f64 = 10.0;
pub const DEFAULT_SAMPLES: usize = 100;

/// One of the five curve parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamName {
    A,
    K,
    Q,
    B,
    V,
}

impl ParamName {
    /// Display order of the controls.
    pub const ALL: [ParamName; 5] = [ParamName::A, ParamName::K, ParamName::Q, ParamName::B, ParamName::V];

    pub fn as_str(self) -> &'static str {
        match self {
            ParamName::A => "a",
            ParamName::K => "k",
            ParamName::Q => "q",
            ParamName::B => "b",
            ParamName::V => "v",
        }
    }

    /// Slider definition for this parameter.
    pub fn spec(self) -> SliderSpec {
        match self {
            ParamName::A => SliderSpec {
                name: self,
                title: "a, Lower Asymptote",
                default: 0.0,
                min: -10.0,
                max: 0.0,
                step: 1.0,
            },
            ParamName::K => SliderSpec {
                name: self,
                title: "k, Upper Asymptote",
                default: 1.0,
                min: 1.0,
                max: 10.0,
                step: 1.0,
            },
            ParamName::Q => SliderSpec {
                name: self,
                title: "q, Affects y at x=0",
                default: 1.0,
                min: 0.001,
                max: 5.0,
                step: 0.1,
            },
            ParamName::B => SliderSpec {
                name: self,
                title: "b, Growth rate",
                default: 1.0,
                min: 0.01,
                max: 3.0,
                step: 0.1,
            },
            ParamName::V => SliderSpec {
                name: self,
                title: "v, Affects where max growth occurs",
                default: 1.0,
                min: 0.01,
                max: 5.0,
                step: 0.1,
            },
        }
    }
}

impl fmt::Display for ParamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParamName {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParamName::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::config(format!("Unknown parameter '{s}' (expected one of a, k, q, b, v)")))
    }
}

/// Static description of a slider control: title plus a bounded, steppable range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderSpec {
    pub name: ParamName,
    pub title: &'static str,
    pub default: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

/// The five curve parameters.
///
/// Validity (`a < k`, `v > 0`) is checked by the evaluator, not here: the
/// controls are allowed to hold any value in their range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Params {
    /// Lower asymptote.
    pub a: f64,
    /// Upper asymptote.
    pub k: f64,
    /// Related to the value at `x = 0`.
    pub q: f64,
    /// Growth rate.
    pub b: f64,
    /// Near which asymptote maximum growth occurs; must be positive.
    pub v: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            a: ParamName::A.spec().default,
            k: ParamName::K.spec().default,
            q: ParamName::Q.spec().default,
            b: ParamName::B.spec().default,
            v: ParamName::V.spec().default,
        }
    }
}

impl Params {
    pub fn get(&self, name: ParamName) -> f64 {
        match name {
            ParamName::A => self.a,
            ParamName::K => self.k,
            ParamName::Q => self.q,
            ParamName::B => self.b,
            ParamName::V => self.v,
        }
    }

    pub fn set(&mut self, name: ParamName, value: f64) {
        match name {
            ParamName::A => self.a = value,
            ParamName::K => self.k = value,
            ParamName::Q => self.q = value,
            ParamName::B => self.b = value,
            ParamName::V => self.v = value,
        }
    }

    /// Copy with one parameter replaced.
    pub fn with(mut self, name: ParamName, value: f64) -> Self {
        self.set(name, value);
        self
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "a={} k={} q={} b={} v={}",
            self.a, self.k, self.q, self.b, self.v
        )
    }
}

/// Fixed, evenly spaced x-values. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleDomain {
    min: f64,
    max: f64,
    xs: Vec<f64>,
}

impl SampleDomain {
    pub fn new(min: f64, max: f64, samples: usize) -> Result<Self, AppError> {
        let xs = linspace(min, max, samples)?;
        Ok(Self { min, max, xs })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }
}

impl Default for SampleDomain {
    fn default() -> Self {
        let xs = linspace_unchecked(DEFAULT_X_MIN, DEFAULT_X_MAX, DEFAULT_SAMPLES);
        Self {
            min: DEFAULT_X_MIN,
            max: DEFAULT_X_MAX,
            xs,
        }
    }
}

/// A computed `(x, y)` series and the parameters that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSeries {
    pub params: Params,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl CurveSeries {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate over `(x, y)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Finite y-range of the series, if any.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for &y in self.y.iter().filter(|y| y.is_finite()) {
            lo = lo.min(y);
            hi = hi.max(y);
        }
        if lo.is_finite() && hi.is_finite() {
            Some((lo, hi))
        } else {
            None
        }
    }

    /// Index of the sample whose x is closest to `x`.
    pub fn nearest_index(&self, x: f64) -> Option<usize> {
        self.x
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                (*a - x)
                    .abs()
                    .partial_cmp(&(*b - x).abs())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|(i, _)| i)
    }
}

/// Change notification emitted by a control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueChanged {
    pub name: ParamName,
    pub old: f64,
    pub new: f64,
}

/// Shape of the sample domain, as recorded in exported files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainSpec {
    pub x_min: f64,
    pub x_max: f64,
    pub samples: usize,
}

impl From<&SampleDomain> for DomainSpec {
    fn from(domain: &SampleDomain) -> Self {
        Self {
            x_min: domain.min(),
            x_max: domain.max(),
            samples: domain.len(),
        }
    }
}

/// A saved curve file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveFile {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub params: Params,
    pub domain: DomainSpec,
    pub series: SeriesData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesData {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}
