//! Errors raised by the designer layer.

use thiserror::Error;
use zplkit_settings::SettingsError;

use crate::element::ElementId;
use crate::scene::SceneError;

/// Designer error type
#[derive(Error, Debug)]
pub enum DesignerError {
    /// Invalid dimensions or resolution
    #[error(transparent)]
    Core(#[from] zplkit_core::Error),

    /// Settings could not be validated or written
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// Scene item no longer exists
    #[error(transparent)]
    Scene(#[from] SceneError),

    /// No element with this id is on the label
    #[error("Unknown element: {0}")]
    UnknownElement(ElementId),
}

impl DesignerError {
    /// Check if this is a geometry validation error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, DesignerError::Core(e) if e.is_geometry_error())
    }
}

/// Result type for designer operations
pub type DesignerResult<T> = std::result::Result<T, DesignerError>;
