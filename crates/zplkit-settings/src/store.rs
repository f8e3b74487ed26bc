//! Settings store
//!
//! Explicitly constructed owner of the application [`Config`]. Components that
//! persist state receive the store by reference; the store writes through to
//! its backing file on every mutation and again on [`SettingsStore::save`].

use std::path::{Path, PathBuf};

use crate::config::{AlignmentSettings, Config, GridSettings, LabelSettings, MeasurementUnit};
use crate::error::{SettingsError, SettingsResult};

const APP_DIR: &str = "zplkit";
const CONFIG_FILE: &str = "settings.json";

/// Owner of the persisted configuration
#[derive(Debug, Clone)]
pub struct SettingsStore {
    config: Config,
    path: Option<PathBuf>,
}

impl SettingsStore {
    /// Store that never touches the filesystem.
    pub fn in_memory() -> Self {
        Self {
            config: Config::default(),
            path: None,
        }
    }

    /// Store backed by `path`. Loads the file if it exists, otherwise starts
    /// from defaults and creates it on the first save.
    pub fn open(path: impl Into<PathBuf>) -> SettingsResult<Self> {
        let mut store = Self {
            config: Config::default(),
            path: Some(path.into()),
        };
        store.load()?;
        Ok(store)
    }

    /// Store backed by the platform configuration directory.
    pub fn open_default() -> SettingsResult<Self> {
        let path = Self::config_file_path()?;
        Self::ensure_config_dir()?;
        Self::open(path)
    }

    /// Platform configuration directory for the application.
    pub fn config_dir() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no configuration directory available".to_string())
            })
    }

    /// Full path of the default settings file.
    pub fn config_file_path() -> SettingsResult<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Create the configuration directory if missing.
    pub fn ensure_config_dir() -> SettingsResult<()> {
        let dir = Self::config_dir()?;
        std::fs::create_dir_all(&dir)
            .map_err(|e| SettingsError::ConfigDirectory(format!("{}: {}", dir.display(), e)))
    }

    /// Backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Reload the configuration from the backing file.
    ///
    /// A missing file leaves the current configuration untouched.
    pub fn load(&mut self) -> SettingsResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if !path.exists() {
            tracing::info!("No settings file at {}, using defaults", path.display());
            return Ok(());
        }
        self.config = Config::load_from_file(path)?;
        tracing::info!("Loaded settings from {}", path.display());
        Ok(())
    }

    /// Write the configuration to the backing file.
    pub fn save(&self) -> SettingsResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        self.config.save_to_file(path)?;
        tracing::debug!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Grid record.
    pub fn grid(&self) -> &GridSettings {
        &self.config.grid
    }

    /// Label record.
    pub fn label(&self) -> &LabelSettings {
        &self.config.label
    }

    /// Ruler unit.
    pub fn ruler_unit(&self) -> MeasurementUnit {
        self.config.ruler.unit
    }

    /// Alignment record.
    pub fn alignment(&self) -> &AlignmentSettings {
        &self.config.alignment
    }

    /// Replace the grid record and persist it.
    pub fn set_grid(&mut self, grid: GridSettings) -> SettingsResult<()> {
        self.update(|config| config.grid = grid)
    }

    /// Replace the label record and persist it.
    pub fn set_label(&mut self, label: LabelSettings) -> SettingsResult<()> {
        self.update(|config| config.label = label)
    }

    /// Change the ruler unit and persist it.
    pub fn set_ruler_unit(&mut self, unit: MeasurementUnit) -> SettingsResult<()> {
        self.update(|config| config.ruler.unit = unit)
    }

    /// Replace the alignment record and persist it.
    pub fn set_alignment(&mut self, alignment: AlignmentSettings) -> SettingsResult<()> {
        self.update(|config| config.alignment = alignment)
    }

    /// Apply a mutation, validate the result and persist it. The previous
    /// configuration is kept when validation fails.
    fn update(&mut self, mutate: impl FnOnce(&mut Config)) -> SettingsResult<()> {
        let mut next = self.config.clone();
        mutate(&mut next);
        next.validate()?;
        self.config = next;
        self.save()
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::in_memory()
    }
}
