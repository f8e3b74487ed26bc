//! Event Bus implementation.
//!
//! Provides the [`ViewEventBus`] used by a canvas to notify rulers and other
//! observers. Handlers run synchronously on the publishing thread.

use parking_lot::RwLock;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use uuid::Uuid;

use super::events::{EventCategory, ViewEvent};

/// Subscription handle for unsubscribing from events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    /// Create a new unique subscription ID
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", &self.0.to_string()[..8])
    }
}

/// Filter to receive only specific event types
#[derive(Debug, Clone, Default)]
pub enum EventFilter {
    /// Receive all events.
    #[default]
    All,
    /// Receive events matching any of these categories.
    Categories(Vec<EventCategory>),
}

impl EventFilter {
    /// Check if an event matches this filter
    pub fn matches(&self, event: &ViewEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Categories(categories) => categories.contains(&event.category()),
        }
    }
}

/// Type alias for event handler functions
type EventHandler = Box<dyn Fn(&ViewEvent) + Send + Sync>;

/// Configuration for the event bus
#[derive(Debug, Clone)]
pub struct EventBusConfig {
    /// Whether to keep event history.
    pub enable_history: bool,
    /// Maximum number of events to retain in history.
    pub max_history_size: usize,
}

impl Default for EventBusConfig {
    fn default() -> Self {
        Self {
            enable_history: false,
            max_history_size: 256,
        }
    }
}

/// Synchronous publish/subscribe bus for view events
///
/// Handlers must not subscribe or unsubscribe from inside a callback.
pub struct ViewEventBus {
    /// Registered synchronous handlers
    handlers: Arc<RwLock<HashMap<SubscriptionId, (EventFilter, EventHandler)>>>,
    /// Event history (optional)
    history: Arc<RwLock<VecDeque<ViewEvent>>>,
    /// Configuration
    config: EventBusConfig,
}

impl ViewEventBus {
    /// Create a new event bus with default configuration
    pub fn new() -> Self {
        Self::with_config(EventBusConfig::default())
    }

    /// Create a new event bus with custom configuration
    pub fn with_config(config: EventBusConfig) -> Self {
        Self {
            handlers: Arc::new(RwLock::new(HashMap::new())),
            history: Arc::new(RwLock::new(VecDeque::new())),
            config,
        }
    }

    /// Publish an event to all matching subscribers
    ///
    /// Returns the number of handlers that received the event.
    pub fn publish(&self, event: ViewEvent) -> usize {
        if self.config.enable_history {
            self.add_to_history(&event);
        }

        tracing::trace!("Publishing view event: {}", event.description());

        let handlers = self.handlers.read();
        let mut delivered = 0;
        for (_, (filter, handler)) in handlers.iter() {
            if filter.matches(&event) {
                handler(&event);
                delivered += 1;
            }
        }
        delivered
    }

    /// Subscribe to events with a synchronous handler
    pub fn subscribe<F>(&self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(&ViewEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId::new();
        let mut handlers = self.handlers.write();
        handlers.insert(id, (filter, Box::new(handler)));
        tracing::debug!("Subscription {} added", id);
        id
    }

    /// Unsubscribe from events
    ///
    /// Returns true if the subscription was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut handlers = self.handlers.write();
        let removed = handlers.remove(&id).is_some();
        if removed {
            tracing::debug!("Subscription {} removed", id);
        }
        removed
    }

    /// Get the number of active subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.handlers.read().len()
    }

    /// Get a copy of the retained event history, oldest first
    pub fn history(&self) -> Vec<ViewEvent> {
        self.history.read().iter().copied().collect()
    }

    /// Clear event history
    pub fn clear_history(&self) {
        self.history.write().clear();
    }

    fn add_to_history(&self, event: &ViewEvent) {
        let mut history = self.history.write();
        history.push_back(*event);
        while history.len() > self.config.max_history_size {
            history.pop_front();
        }
    }
}

impl Default for ViewEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ViewEventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewEventBus")
            .field("subscribers", &self.subscriber_count())
            .field("config", &self.config)
            .finish()
    }
}
