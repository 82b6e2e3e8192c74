//! Publish/subscribe relay between sibling components.
//!
//! DESIGN
//! ======
//! Product display, review form and cart drawer have no parent/child link, so
//! they exchange notifications through an `EventBus` handle that the root
//! application creates once and provides through Leptos context. Tests build
//! an isolated bus per case.
//!
//! Delivery is synchronous and follows registration order. The handler table
//! is snapshotted before dispatch, so a handler may publish or subscribe
//! reentrantly; handlers registered mid-dispatch only see later
//! notifications.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::state::product::VariantId;
use crate::state::review::Review;

/// Named notification channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topic {
    /// A review passed validation in the review form.
    ReviewSubmitted,
    /// An item was removed from the cart and its stock can be returned.
    CartItemDeleted,
}

impl Topic {
    /// Wire name of the notification.
    pub fn name(self) -> &'static str {
        match self {
            Self::ReviewSubmitted => "review-submitted",
            Self::CartItemDeleted => "cart-item-deleted",
        }
    }
}

/// A notification together with its payload.
#[derive(Clone, Debug, PartialEq)]
pub enum Notification {
    ReviewSubmitted(Review),
    CartItemDeleted(VariantId),
}

impl Notification {
    pub fn topic(&self) -> Topic {
        match self {
            Self::ReviewSubmitted(_) => Topic::ReviewSubmitted,
            Self::CartItemDeleted(_) => Topic::CartItemDeleted,
        }
    }
}

/// Handle returned by [`EventBus::subscribe`], used to detach a handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler = Arc<dyn Fn(&Notification) + Send + Sync>;

struct Subscriber {
    id: SubscriptionId,
    topic: Topic,
    handler: Handler,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    subscribers: Vec<Subscriber>,
}

/// Cloneable handle to a shared subscriber table.
///
/// Clones share the same table, so a handle taken from context in one
/// component reaches handlers registered by any other.
#[derive(Clone, Default)]
pub struct EventBus {
    registry: Arc<Mutex<Registry>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for every later notification on `topic`.
    pub fn subscribe<F>(&self, topic: Topic, handler: F) -> SubscriptionId
    where
        F: Fn(&Notification) + Send + Sync + 'static,
    {
        let mut registry = self.lock();
        let id = SubscriptionId(registry.next_id);
        registry.next_id += 1;
        registry.subscribers.push(Subscriber { id, topic, handler: Arc::new(handler) });
        log::debug!("bus: subscribed {:?} to {}", id, topic.name());
        id
    }

    /// Detach a handler. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut registry = self.lock();
        let before = registry.subscribers.len();
        registry.subscribers.retain(|s| s.id != id);
        registry.subscribers.len() != before
    }

    /// Number of handlers currently registered for `topic`.
    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.lock()
            .subscribers
            .iter()
            .filter(|s| s.topic == topic)
            .count()
    }

    /// Deliver `notification` to every current subscriber of its topic.
    ///
    /// Returns the number of handlers that ran; zero is a normal outcome.
    pub fn publish(&self, notification: Notification) -> usize {
        let topic = notification.topic();
        let handlers: Vec<Handler> = self
            .lock()
            .subscribers
            .iter()
            .filter(|s| s.topic == topic)
            .map(|s| Arc::clone(&s.handler))
            .collect();

        log::debug!("bus: publish {} to {} handler(s)", topic.name(), handlers.len());
        for handler in &handlers {
            handler(&notification);
        }
        handlers.len()
    }

    fn lock(&self) -> MutexGuard<'_, Registry> {
        // Handlers never run under the lock, so a poisoned table is still consistent.
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let registry = self.lock();
        f.debug_struct("EventBus")
            .field("subscribers", &registry.subscribers.len())
            .finish()
    }
}
