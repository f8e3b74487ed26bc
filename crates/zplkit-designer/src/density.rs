//! Printer density (dots per millimeter) derived from the label DPI.

use std::fmt;

use serde::{Deserialize, Serialize};
use zplkit_core::constants::MM_PER_INCH;

/// Print densities accepted by label preview services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrintDensity {
    #[serde(rename = "6dpmm")]
    Dpmm6,
    #[serde(rename = "8dpmm")]
    Dpmm8,
    #[serde(rename = "12dpmm")]
    Dpmm12,
    #[serde(rename = "24dpmm")]
    Dpmm24,
}

impl PrintDensity {
    pub const ALL: [PrintDensity; 4] = [
        PrintDensity::Dpmm6,
        PrintDensity::Dpmm8,
        PrintDensity::Dpmm12,
        PrintDensity::Dpmm24,
    ];

    /// Nominal printer resolution for this density.
    pub fn dpi(self) -> f64 {
        match self {
            PrintDensity::Dpmm6 => 152.0,
            PrintDensity::Dpmm8 => 203.0,
            PrintDensity::Dpmm12 => 300.0,
            PrintDensity::Dpmm24 => 600.0,
        }
    }

    pub fn dots_per_mm(self) -> u32 {
        match self {
            PrintDensity::Dpmm6 => 6,
            PrintDensity::Dpmm8 => 8,
            PrintDensity::Dpmm12 => 12,
            PrintDensity::Dpmm24 => 24,
        }
    }

    /// Nearest supported density for `dpi`. Ties go to the lower density.
    pub fn from_dpi(dpi: f64) -> Self {
        let mut best = PrintDensity::Dpmm8;
        let mut best_distance = f64::INFINITY;
        for density in Self::ALL {
            let distance = (density.dpi() - dpi).abs();
            if distance < best_distance {
                best = density;
                best_distance = distance;
            }
        }
        best
    }

    /// Path segment form, e.g. `8dpmm`.
    pub fn as_api_str(self) -> &'static str {
        match self {
            PrintDensity::Dpmm6 => "6dpmm",
            PrintDensity::Dpmm8 => "8dpmm",
            PrintDensity::Dpmm12 => "12dpmm",
            PrintDensity::Dpmm24 => "24dpmm",
        }
    }
}

impl fmt::Display for PrintDensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_api_str())
    }
}

/// Exact dots per millimeter for `dpi`.
pub fn dpmm(dpi: f64) -> f64 {
    dpi / MM_PER_INCH
}
