//! Runtime configuration.
//!
//! Resolution order: built-in defaults, then environment variables (a `.env`
//! file is honoured via `dotenvy`), then CLI flags.
//!
//! | variable              | meaning                         |
//! |-----------------------|---------------------------------|
//! | `LOGISTIC_X_MIN`      | lower bound of the x-domain     |
//! | `LOGISTIC_X_MAX`      | upper bound of the x-domain     |
//! | `LOGISTIC_SAMPLES`    | number of samples in the domain |
//! | `LOGISTIC_LOG`        | log file used by the TUI        |
//! | `LOGISTIC_EXPORT_DIR` | directory for TUI exports       |

use std::path::PathBuf;
use std::str::FromStr;

use crate::cli::CurveArgs;
use crate::domain::{DEFAULT_SAMPLES, DEFAULT_X_MAX, DEFAULT_X_MIN, ParamName, Params, SampleDomain};
use crate::error::AppError;

pub const ENV_X_MIN: &str = "LOGISTIC_X_MIN";
pub const ENV_X_MAX: &str = "LOGISTIC_X_MAX";
pub const ENV_SAMPLES: &str = "LOGISTIC_SAMPLES";
pub const ENV_LOG: &str = "LOGISTIC_LOG";
pub const ENV_EXPORT_DIR: &str = "LOGISTIC_EXPORT_DIR";

pub const DEFAULT_LOG_FILE: &str = "logistic.log";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub x_min: f64,
    pub x_max: f64,
    pub samples: usize,
    pub params: Params,
    pub log_file: PathBuf,
    pub export_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            x_min: DEFAULT_X_MIN,
            x_max: DEFAULT_X_MAX,
            samples: DEFAULT_SAMPLES,
            params: Params::default(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            export_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Defaults overlaid with the process environment (and `.env`, if present).
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values from `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(v) = parse_var::<f64, _>(&lookup, ENV_X_MIN)? {
            config.x_min = v;
        }
        if let Some(v) = parse_var::<f64, _>(&lookup, ENV_X_MAX)? {
            config.x_max = v;
        }
        if let Some(v) = parse_var::<usize, _>(&lookup, ENV_SAMPLES)? {
            config.samples = v;
        }
        if let Some(v) = lookup(ENV_LOG).filter(|s| !s.trim().is_empty()) {
            config.log_file = PathBuf::from(v.trim());
        }
        if let Some(v) = lookup(ENV_EXPORT_DIR).filter(|s| !s.trim().is_empty()) {
            config.export_dir = PathBuf::from(v.trim());
        }
        Ok(config)
    }

    /// Apply CLI overrides.
    pub fn with_args(mut self, args: &CurveArgs) -> Self {
        for name in ParamName::ALL {
            if let Some(v) = args.param(name) {
                self.params.set(name, v);
            }
        }
        if let Some(v) = args.x_min {
            self.x_min = v;
        }
        if let Some(v) = args.x_max {
            self.x_max = v;
        }
        if let Some(v) = args.samples {
            self.samples = v;
        }
        self
    }

    /// Build the sample domain described by this config.
    pub fn domain(&self) -> Result<SampleDomain, AppError> {
        SampleDomain::new(self.x_min, self.x_max, self.samples)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<T>()
        .map(Some)
        .map_err(|e| AppError::config(format!("Invalid {key}='{trimmed}': {e}")))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.domain().unwrap().len(), 100);
    }

    #[test]
    fn environment_overrides_domain() {
        let config = Config::from_lookup(lookup(&[
            (ENV_X_MIN, "-20"),
            (ENV_X_MAX, " 20 "),
            (ENV_SAMPLES, "41"),
            (ENV_LOG, "/tmp/l.log"),
        ]))
        .unwrap();
        assert_eq!(config.x_min, -20.0);
        assert_eq!(config.x_max, 20.0);
        assert_eq!(config.samples, 41);
        assert_eq!(config.log_file, PathBuf::from("/tmp/l.log"));
    }

    #[test]
    fn bad_environment_value_names_the_variable() {
        let err = Config::from_lookup(lookup(&[(ENV_SAMPLES, "many")])).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_CONFIG);
        assert!(err.to_string().contains(ENV_SAMPLES));
    }

    #[test]
    fn cli_args_override_environment() {
        let args = CurveArgs {
            a: Some(-4.0),
            v: Some(0.5),
            samples: Some(11),
            ..CurveArgs::default()
        };
        let config = Config::from_lookup(lookup(&[(ENV_SAMPLES, "41")]))
            .unwrap()
            .with_args(&args);
        assert_eq!(config.samples, 11);
        assert_eq!(config.params, Params { a: -4.0, v: 0.5, ..Params::default() });
    }

    #[test]
    fn inverted_domain_is_a_config_error() {
        let config = Config { x_min: 5.0, x_max: -5.0, ..Config::default() };
        assert!(config.domain().is_err());
    }
}
