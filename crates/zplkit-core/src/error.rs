//! Error handling for ZPLKit
//!
//! Provides error types for the geometry layer:
//! - Geometry errors (invalid dimensions, resolutions, spacings)
//! - Unit parsing errors
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
///
/// Raised when a caller supplies dimensions the canvas cannot represent.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A length that must be strictly positive was not
    #[error("{name} must be > 0 (got {value})")]
    NonPositive {
        /// The name of the offending quantity.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A length that must not be negative was
    #[error("{name} must be >= 0 (got {value})")]
    Negative {
        /// The name of the offending quantity.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A value was NaN or infinite
    #[error("{name} must be finite")]
    NotFinite {
        /// The name of the offending quantity.
        name: &'static str,
    },
}

impl GeometryError {
    /// Checks that `value` is finite and strictly positive.
    pub fn ensure_positive(name: &'static str, value: f64) -> Result<f64> {
        if !value.is_finite() {
            return Err(GeometryError::NotFinite { name }.into());
        }
        if value <= 0.0 {
            return Err(GeometryError::NonPositive { name, value }.into());
        }
        Ok(value)
    }

    /// Checks that `value` is finite and not negative.
    pub fn ensure_non_negative(name: &'static str, value: f64) -> Result<f64> {
        if !value.is_finite() {
            return Err(GeometryError::NotFinite { name }.into());
        }
        if value < 0.0 {
            return Err(GeometryError::Negative { name, value }.into());
        }
        Ok(value)
    }
}

/// Unknown measurement unit name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown measurement unit: {0}")]
pub struct UnitParseError(pub String);

/// Main error type for ZPLKit
///
/// A unified error type that can represent any error from the core layer.
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Unit parse error
    #[error(transparent)]
    Unit(#[from] UnitParseError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a geometry error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
