//! # View Event Bus
//!
//! Publish/subscribe channel between the label canvas and the widgets that
//! mirror its state (rulers, status readouts).
//!
//! ## Overview
//!
//! - The canvas publishes typed [`ViewEvent`]s without knowing who listens
//! - Subscribers filter by [`EventCategory`] and react synchronously
//! - Neither side owns the other; dropping a subscription detaches it
//!
//! ## Usage
//!
//! ```rust,ignore
//! use zplkit_core::event_bus::{EventCategory, EventFilter, ViewEvent, ViewEventBus};
//!
//! let bus = ViewEventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Transform]),
//!     |event| {
//!         if let ViewEvent::ScaleChanged { scale } = event {
//!             println!("zoom is now {scale}");
//!         }
//!     },
//! );
//!
//! bus.publish(ViewEvent::ScaleChanged { scale: 1.15 });
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
