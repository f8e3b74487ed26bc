//! Event type definitions for the view event bus.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ruler / axis orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Runs along the X axis (top ruler)
    Horizontal,
    /// Runs along the Y axis (left ruler)
    Vertical,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

/// Events published by the label canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ViewEvent {
    /// View scale changed after a zoom operation
    ScaleChanged {
        /// New clamped scale factor
        scale: f64,
    },
    /// Printer resolution changed
    DpiChanged {
        /// New resolution in dots per inch
        dpi: f64,
    },
    /// Label extent along one axis changed
    LengthChanged {
        /// Axis whose extent changed
        orientation: Orientation,
        /// New extent in mm
        length_mm: f64,
    },
    /// Pointer moved over the canvas (None = left the canvas)
    CursorMoved {
        /// Scene X in mm
        x_mm: Option<f64>,
        /// Scene Y in mm
        y_mm: Option<f64>,
    },
    /// Selection bounds changed (None = nothing selected)
    SelectionBoundsChanged {
        /// `(x, y, width, height)` in mm
        bounds_mm: Option<(f64, f64, f64, f64)>,
    },
}

impl ViewEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            ViewEvent::ScaleChanged { .. } | ViewEvent::DpiChanged { .. } => {
                EventCategory::Transform
            }
            ViewEvent::LengthChanged { .. } => EventCategory::Geometry,
            ViewEvent::CursorMoved { .. } | ViewEvent::SelectionBoundsChanged { .. } => {
                EventCategory::Overlay
            }
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            ViewEvent::ScaleChanged { scale } => format!("Scale changed to {:.3}", scale),
            ViewEvent::DpiChanged { dpi } => format!("DPI changed to {}", dpi),
            ViewEvent::LengthChanged {
                orientation,
                length_mm,
            } => format!("{} length changed to {:.2} mm", orientation, length_mm),
            ViewEvent::CursorMoved { x_mm, y_mm } => match (x_mm, y_mm) {
                (Some(x), Some(y)) => format!("Cursor at ({:.2}, {:.2}) mm", x, y),
                _ => "Cursor left canvas".to_string(),
            },
            ViewEvent::SelectionBoundsChanged { bounds_mm } => match bounds_mm {
                Some((x, y, w, h)) => {
                    format!("Selection at ({:.2}, {:.2}) size {:.2}x{:.2} mm", x, y, w, h)
                }
                None => "Selection cleared".to_string(),
            },
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Scale and resolution changes
    Transform,
    /// Label extent changes
    Geometry,
    /// Cursor and selection overlays
    Overlay,
}
