//! Error types.
//!
//! - `CurveError` is the single domain error: raised by the evaluator when the
//!   parameter set is invalid. It is never caught inside the library.
//! - `AppError` is the application boundary error: a message plus the process
//!   exit code used by the `logistic` binary.

use thiserror::Error;

/// Exit code for configuration / usage errors.
pub const EXIT_CONFIG: u8 = 2;
/// Exit code for invalid curve parameters.
pub const EXIT_INVALID_PARAMETER: u8 = 3;
/// Exit code for I/O and terminal errors.
pub const EXIT_IO: u8 = 4;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    #[error("{message}")]
    InvalidParameter { message: String },
}

impl CurveError {
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        CurveError::InvalidParameter {
            message: message.into(),
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(EXIT_CONFIG, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(EXIT_IO, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<CurveError> for AppError {
    fn from(err: CurveError) -> Self {
        AppError::new(EXIT_INVALID_PARAMETER, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_error_maps_to_invalid_parameter_exit_code() {
        let err: AppError = CurveError::invalid_parameter("Parameter 'v' must be positive: [v=0]").into();
        assert_eq!(err.exit_code(), EXIT_INVALID_PARAMETER);
        assert_eq!(err.to_string(), "Parameter 'v' must be positive: [v=0]");
    }
}
