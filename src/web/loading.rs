//! Loading-state broadcaster driving the navigation progress bar.
//!
//! A [`LoadingController`] is created once per process and shared through the app state;
//! tests build their own isolated instances. Subscribers are kept in memory only. Every
//! subscriber receives every broadcast, in subscription order.

use serde::Serialize;
use std::{
    collections::BTreeMap,
    fmt,
    sync::{
        Arc, PoisonError, RwLock, Weak,
        atomic::{AtomicU64, Ordering},
    },
};

/// What subscribers receive on every broadcast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadingPayload {
    /// `true` on start, `false` on stop
    pub active: bool,
    /// Optional caption shown next to the bar
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

type Listener = Arc<dyn Fn(&LoadingPayload) + Send + Sync>;

#[derive(Default)]
struct Listeners {
    next_id: AtomicU64,
    by_id: RwLock<BTreeMap<u64, Listener>>,
}

/// Publish/subscribe channel with two events: start (`show`) and stop (`hide`).
#[derive(Clone, Default)]
pub struct LoadingController {
    listeners: Arc<Listeners>,
}

/// Handle returned by [`LoadingController::subscribe`].
///
/// Dropping the handle does not unsubscribe; call [`Subscription::unsubscribe`].
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    listeners: Weak<Listeners>,
}

impl LoadingController {
    /// Creates a controller with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` for every future broadcast.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&LoadingPayload) + Send + Sync + 'static,
    {
        let id = self.listeners.next_id.fetch_add(1, Ordering::Relaxed);
        self.listeners
            .by_id
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, Arc::new(listener));
        Subscription {
            id,
            listeners: Arc::downgrade(&self.listeners),
        }
    }

    /// Broadcasts `{active: true, text}`.
    pub fn show(&self, text: Option<&str>) {
        self.broadcast(&LoadingPayload {
            active: true,
            text: text.map(str::to_string),
        });
    }

    /// Broadcasts `{active: false}`.
    pub fn hide(&self) {
        self.broadcast(&LoadingPayload {
            active: false,
            text: None,
        });
    }

    /// Number of current subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.listeners
            .by_id
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn broadcast(&self, payload: &LoadingPayload) {
        // Snapshot first so a listener may unsubscribe while being called.
        let snapshot: Vec<Listener> = self
            .listeners
            .by_id
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect();
        for listener in snapshot {
            listener(payload);
        }
    }
}

impl fmt::Debug for LoadingController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadingController")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl Subscription {
    /// Removes this subscriber. Calling it again, or after the controller is gone, is a no-op.
    pub fn unsubscribe(&self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners
                .by_id
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .remove(&self.id);
        }
    }
}
