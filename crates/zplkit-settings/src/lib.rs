//! ZPLKit Settings Crate
//!
//! Handles application configuration and settings persistence.
//! Supports JSON and TOML file formats stored in platform-specific directories.

pub mod config;
pub mod error;
pub mod store;

pub use config::{
    AlignmentSettings, Config, GridSettings, LabelSettings, MeasurementUnit, RulerSettings,
    SnapMode,
};
pub use error::{ConfigError, SettingsError, SettingsResult};
pub use store::SettingsStore;
