//! Type aliases for shared-state types.
//!
//! `Arc<parking_lot::Mutex<RulerModel>>` is hard to read at a glance; the
//! alias names the one sharing pattern used across the crates.
//!
//! ```rust,ignore
//! use zplkit_core::types::*;
//!
//! let ruler: ThreadSafe<RulerModel> = thread_safe(RulerModel::horizontal(100.0, 203.0));
//! ruler.lock().set_unit(MeasurementUnit::Inch);
//! ```

use parking_lot::Mutex;
use std::sync::Arc;

/// A thread-safe, mutex-protected wrapper.
///
/// Required whenever state is captured by a [`crate::ViewEventBus`] handler,
/// since handlers must be `Send + Sync`.
pub type ThreadSafe<T> = Arc<Mutex<T>>;

/// Create a new `ThreadSafe<T>` from a value.
pub fn thread_safe<T>(value: T) -> ThreadSafe<T> {
    Arc::new(Mutex::new(value))
}
