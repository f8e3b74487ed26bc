//! Configuration model for ZPLKit
//!
//! Configuration is organized into logical sections:
//! - Grid settings (spacing, offset, visibility, snapping)
//! - Label settings (stock size, printer resolution)
//! - Ruler preferences (measurement unit)
//! - Alignment preferences (smart guides)

use serde::{Deserialize, Serialize};
use std::path::Path;
use zplkit_core::constants::{
    DEFAULT_DPI, DEFAULT_GRID_SIZE_MM, DEFAULT_LABEL_HEIGHT_MM, DEFAULT_LABEL_WIDTH_MM,
    SNAP_THRESHOLD_MM,
};
pub use zplkit_core::units::MeasurementUnit;

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// How dragged elements are snapped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapMode {
    /// Free movement
    None,
    /// Snap to the nearest grid line
    Grid,
    /// Snap to sibling edges and centers
    Guides,
    /// Grid snapping first, then smart guides
    Both,
}

impl SnapMode {
    /// Whether grid snapping is active in this mode.
    pub fn snaps_to_grid(self) -> bool {
        matches!(self, Self::Grid | Self::Both)
    }

    /// Whether smart guides are active in this mode.
    pub fn snaps_to_guides(self) -> bool {
        matches!(self, Self::Guides | Self::Both)
    }
}

impl Default for SnapMode {
    fn default() -> Self {
        Self::Guides
    }
}

impl std::fmt::Display for SnapMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Grid => write!(f, "grid"),
            Self::Guides => write!(f, "guides"),
            Self::Both => write!(f, "both"),
        }
    }
}

/// Persisted grid record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSettings {
    /// Horizontal spacing between vertical lines (mm)
    pub size_x: f64,
    /// Vertical spacing between horizontal lines (mm)
    pub size_y: f64,
    /// X position of the first vertical line (mm)
    #[serde(default)]
    pub offset_x: f64,
    /// Y position of the first horizontal line (mm)
    #[serde(default)]
    pub offset_y: f64,
    /// Whether grid lines are drawn
    #[serde(default = "default_true")]
    pub show_gridlines: bool,
    /// Snapping behaviour while dragging
    #[serde(default)]
    pub snap_mode: SnapMode,
}

fn default_true() -> bool {
    true
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            size_x: DEFAULT_GRID_SIZE_MM,
            size_y: DEFAULT_GRID_SIZE_MM,
            offset_x: 0.0,
            offset_y: 0.0,
            show_gridlines: true,
            snap_mode: SnapMode::default(),
        }
    }
}

/// Label stock settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelSettings {
    /// Label width in mm
    pub width_mm: f64,
    /// Label height in mm
    pub height_mm: f64,
    /// Printer resolution in dots per inch
    pub dpi: f64,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            width_mm: DEFAULT_LABEL_WIDTH_MM,
            height_mm: DEFAULT_LABEL_HEIGHT_MM,
            dpi: DEFAULT_DPI,
        }
    }
}

/// Ruler preferences
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RulerSettings {
    /// Unit used for ruler labels
    #[serde(default)]
    pub unit: MeasurementUnit,
}

/// Smart guide preferences
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignmentSettings {
    /// Whether smart guides are computed while dragging
    pub enabled: bool,
    /// Snap distance in mm
    #[serde(default = "default_threshold")]
    pub threshold_mm: f64,
}

fn default_threshold() -> f64 {
    SNAP_THRESHOLD_MM
}

impl Default for AlignmentSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold_mm: SNAP_THRESHOLD_MM,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Grid settings
    #[serde(default)]
    pub grid: GridSettings,
    /// Label stock settings
    #[serde(default)]
    pub label: LabelSettings,
    /// Ruler preferences
    #[serde(default)]
    pub ruler: RulerSettings,
    /// Smart guide preferences
    #[serde(default)]
    pub alignment: AlignmentSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match extension(path) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into())
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match extension(path) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)
                .map_err(|e| SettingsError::SaveError(format!("Failed to serialize config: {}", e)))?,
            other => {
                return Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into())
            }
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let grid = &self.grid;
        if !is_positive(grid.size_x) {
            return Err(ConfigError::out_of_range("grid.size_x", grid.size_x));
        }
        if !is_positive(grid.size_y) {
            return Err(ConfigError::out_of_range("grid.size_y", grid.size_y));
        }
        if !is_non_negative(grid.offset_x) {
            return Err(ConfigError::out_of_range("grid.offset_x", grid.offset_x));
        }
        if !is_non_negative(grid.offset_y) {
            return Err(ConfigError::out_of_range("grid.offset_y", grid.offset_y));
        }

        let label = &self.label;
        if !is_positive(label.width_mm) {
            return Err(ConfigError::out_of_range("label.width_mm", label.width_mm));
        }
        if !is_positive(label.height_mm) {
            return Err(ConfigError::out_of_range("label.height_mm", label.height_mm));
        }
        if !is_positive(label.dpi) {
            return Err(ConfigError::out_of_range("label.dpi", label.dpi));
        }

        if !is_non_negative(self.alignment.threshold_mm) {
            return Err(ConfigError::out_of_range(
                "alignment.threshold_mm",
                self.alignment.threshold_mm,
            ));
        }

        Ok(())
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}
