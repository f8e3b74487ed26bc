//! # ZPLKit Core
//!
//! Core types and utilities shared by the ZPLKit crates.
//! Provides measurement units, geometry constants, error types,
//! the view event bus, and shared-state type aliases.

pub mod constants;
pub mod error;
pub mod event_bus;
pub mod types;
pub mod units;

pub use error::{Error, GeometryError, Result, UnitParseError};

// Re-export event bus for convenience
pub use event_bus::{
    EventBusConfig, EventCategory, EventFilter, Orientation, SubscriptionId, ViewEvent,
    ViewEventBus,
};

pub use types::{thread_safe, ThreadSafe};

pub use units::{convert_between, format_value, mm_to_unit, unit_to_mm, MeasurementUnit};
