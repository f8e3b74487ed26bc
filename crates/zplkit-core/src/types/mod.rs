//! Type system utilities and aliases.
//!
//! - [`aliases`]: The `Arc<Mutex<T>>` alias shared with event-bus handlers.

pub mod aliases;

pub use aliases::*;
