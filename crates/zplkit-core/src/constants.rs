//! Geometry and interaction constants.
//!
//! All lengths are in millimeters unless the name says otherwise.

/// Millimeters per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Default printer resolution (dots per inch) for new labels.
pub const DEFAULT_DPI: f64 = 203.0;

/// Default label width in mm (4 inch stock).
pub const DEFAULT_LABEL_WIDTH_MM: f64 = 101.6;

/// Default label height in mm (6 inch stock).
pub const DEFAULT_LABEL_HEIGHT_MM: f64 = 152.4;

/// Smallest allowed view scale.
pub const MIN_SCALE: f64 = 0.5;

/// Largest allowed view scale.
pub const MAX_SCALE: f64 = 10.0;

/// Scale multiplier applied per wheel notch or zoom command.
pub const ZOOM_STEP: f64 = 1.15;

/// Maximum distance between reference lines for a smart guide to engage.
pub const SNAP_THRESHOLD_MM: f64 = 2.0;

/// Length of a rendered guide line in device pixels.
pub const GUIDE_SPAN_PX: f64 = 1000.0;

/// Tolerance used when classifying ruler positions as major ticks.
pub const MAJOR_TICK_TOLERANCE_MM: f64 = 0.01;

/// Default grid spacing in mm.
pub const DEFAULT_GRID_SIZE_MM: f64 = 5.0;

/// Padding fraction reserved around the label by fit-to-view.
pub const VIEW_PADDING: f64 = 0.05;
