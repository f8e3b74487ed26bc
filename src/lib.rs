//! # ZPLKit
//!
//! Geometry core of a ZPL thermal label designer:
//! - Millimeter, device-pixel and view-space transforms with zoom-to-point
//! - Grid generation, visibility toggling and snapping
//! - Ruler tick layout in millimeters, centimeters and inches
//! - Smart guides for edge and center alignment while dragging
//!
//! ## Architecture
//!
//! ZPLKit is organized as a workspace with multiple crates:
//!
//! 1. **zplkit-core** - Units, constants, errors, view event bus
//! 2. **zplkit-settings** - Configuration records and the settings store
//! 3. **zplkit-designer** - Canvas, grid, rulers, guides and the controller
//! 4. **zplkit** - This crate: logging setup and headless startup

pub use zplkit_designer as designer;
pub use zplkit_settings as settings;

pub use zplkit_core::{
    convert_between, format_value, mm_to_unit, unit_to_mm, Error, MeasurementUnit, Orientation,
    Result, ViewEvent, ViewEventBus,
};

pub use zplkit_designer::{
    CanvasSpace, DesignerController, DesignerError, DesignerResult, ElementId, ElementKind,
    GridConfig, LabelCanvas, LabelElement, Point, PrintDensity, RulerModel, SmartGuides,
    SnapProposal, ViewTransform,
};

pub use zplkit_settings::{Config, SettingsError, SettingsStore, SnapMode};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Environment variable selecting the log output format (`pretty` or `json`)
pub const LOG_FORMAT_ENV: &str = "ZPLKIT_LOG_FORMAT";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable multi-line output
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

impl LogFormat {
    /// Reads the format from [`LOG_FORMAT_ENV`], defaulting to pretty output.
    pub fn from_env() -> Self {
        match std::env::var(LOG_FORMAT_ENV) {
            Ok(value) if value.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output, pretty or JSON per [`LOG_FORMAT_ENV`]
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    init_logging_with(LogFormat::from_env())
}

/// Initialize logging with an explicit output format
pub fn init_logging_with(format: LogFormat) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    match format {
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(true)
                .with_level(true)
                .with_thread_ids(true)
                .with_thread_names(true)
                .with_line_number(true)
                .pretty();

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(true)
                .with_level(true)
                .with_line_number(true)
                .json();

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
    }

    Ok(())
}
