//! Unit conversion utilities
//!
//! Millimeters are the base unit for every label coordinate. Values shown
//! to the user are converted to millimeters, centimeters or inches on the way
//! out and back to millimeters on the way in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::MM_PER_INCH;
use crate::error::UnitParseError;

/// Measurement unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeasurementUnit {
    /// Millimeters
    #[serde(rename = "mm")]
    Millimeter,
    /// Centimeters
    #[serde(rename = "cm")]
    Centimeter,
    /// Inches
    #[serde(rename = "in", alias = "inch")]
    Inch,
}

impl MeasurementUnit {
    /// Every supported unit, in menu order.
    pub const ALL: [MeasurementUnit; 3] = [Self::Millimeter, Self::Centimeter, Self::Inch];

    /// Millimeters per one of this unit.
    pub fn factor(self) -> f64 {
        match self {
            Self::Millimeter => 1.0,
            Self::Centimeter => 10.0,
            Self::Inch => MM_PER_INCH,
        }
    }

    /// Units per millimeter.
    pub fn inverse_factor(self) -> f64 {
        match self {
            Self::Millimeter => 1.0,
            Self::Centimeter => 0.1,
            Self::Inch => 1.0 / MM_PER_INCH,
        }
    }

    /// Short label used after formatted values.
    pub fn label(self) -> &'static str {
        match self {
            Self::Millimeter => "mm",
            Self::Centimeter => "cm",
            Self::Inch => "in",
        }
    }
}

impl Default for MeasurementUnit {
    fn default() -> Self {
        Self::Millimeter
    }
}

impl fmt::Display for MeasurementUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MeasurementUnit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mm" | "millimeter" | "millimeters" => Ok(Self::Millimeter),
            "cm" | "centimeter" | "centimeters" => Ok(Self::Centimeter),
            "in" | "inch" | "inches" => Ok(Self::Inch),
            _ => Err(UnitParseError(s.to_string())),
        }
    }
}

/// Convert a value expressed in `unit` to millimeters.
pub fn unit_to_mm(value: f64, unit: MeasurementUnit) -> f64 {
    value * unit.factor()
}

/// Convert millimeters to a value expressed in `unit`.
pub fn mm_to_unit(mm: f64, unit: MeasurementUnit) -> f64 {
    mm * unit.inverse_factor()
}

/// Convert a value between two units, going through millimeters.
///
/// Converting to the same unit returns the input untouched.
pub fn convert_between(value: f64, from: MeasurementUnit, to: MeasurementUnit) -> f64 {
    if from == to {
        return value;
    }
    mm_to_unit(unit_to_mm(value, from), to)
}

/// Format a millimeter value in `unit` with a fixed number of decimals,
/// e.g. `"1.00 in"`.
pub fn format_value(mm: f64, unit: MeasurementUnit, decimals: usize) -> String {
    format!("{:.*} {}", decimals, mm_to_unit(mm, unit), unit.label())
}
