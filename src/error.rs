//! Error types for the evaluator
//!
//! One enum covers the whole pipeline. The only fatal configuration error
//! (a flat weight or bias vector too short for a requested unit) carries the
//! layer name and failing unit index so the report names exactly what broke.

use std::fmt;
use std::io;

/// Crate-wide error type.
#[derive(Debug)]
pub enum Error {
    /// A flat weight vector is too short for the requested unit slice.
    InsufficientWeights {
        /// Layer being sliced ("conv", "dense", "output").
        layer: &'static str,
        /// Unit index whose slice ran past the end of the vector.
        unit: usize,
        /// Elements the slice needed in total.
        needed: usize,
        /// Elements actually available.
        available: usize,
    },
    /// A bias vector is too short for the requested unit index.
    InsufficientBiases {
        layer: &'static str,
        unit: usize,
        available: usize,
    },
    /// Shape incompatibility at a layer boundary.
    ShapeMismatch(String),
    /// Invalid evaluation configuration or topology.
    InvalidConfig(String),
    /// Malformed weight or dataset file contents.
    InvalidData(String),
    /// Underlying I/O failure.
    Io(io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InsufficientWeights {
                layer,
                unit,
                needed,
                available,
            } => write!(
                f,
                "{} layer: weight vector too short for unit {} (need {}, have {})",
                layer, unit, needed, available
            ),
            Error::InsufficientBiases {
                layer,
                unit,
                available,
            } => write!(
                f,
                "{} layer: bias vector too short for unit {} (have {})",
                layer, unit, available
            ),
            Error::ShapeMismatch(msg) => write!(f, "shape mismatch: {}", msg),
            Error::InvalidConfig(msg) => write!(f, "invalid config: {}", msg),
            Error::InvalidData(msg) => write!(f, "invalid data: {}", msg),
            Error::Io(err) => write!(f, "io error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidConfig(err.to_string())
    }
}
