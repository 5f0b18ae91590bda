//! The publish/subscribe core.
//!
//! The hub holds the current notification and a registration table of
//! subscribers. Publishing replaces the current value and drives every
//! subscriber's reaction to completion before returning. Subscribers are
//! removed explicitly via their `SubscriberId`; the hub never prunes
//! entries on its own.

use crate::core::{HubError, Notification, NotifyContext, Subscriber, SubscriberId};
use std::sync::{Arc, Mutex};
use tracing::{debug, instrument, trace};

struct HubState {
    current: Option<Arc<dyn Notification>>,
    subscribers: Vec<(SubscriberId, Arc<dyn Subscriber>)>,
    next_id: u64,
}

/// The notification hub: one current notification, 0..N subscribers.
pub struct NotificationHub {
    state: Mutex<HubState>,
    /// Serializes publishes: one full fan-out completes before the next
    /// begins.
    publish_gate: tokio::sync::Mutex<()>,
    /// Task currently driving a fan-out, used to reject re-entrant
    /// publishes from subscriber callbacks.
    active_publisher: Mutex<Option<tokio::task::Id>>,
}

impl NotificationHub {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(HubState {
                current: None,
                subscribers: Vec::new(),
                next_id: 0,
            }),
            publish_gate: tokio::sync::Mutex::new(()),
            active_publisher: Mutex::new(None),
        }
    }

    /// Registers a subscriber and returns the handle needed to remove it.
    /// Subscribers are notified in subscription order.
    pub fn subscribe(&self, subscriber: Arc<dyn Subscriber>) -> SubscriberId {
        let mut state = self.state.lock().unwrap();
        let id = SubscriberId(state.next_id);
        state.next_id += 1;
        debug!(subscriber = subscriber.name(), id = id.0, "subscribed");
        state.subscribers.push((id, subscriber));
        id
    }

    /// Removes a subscriber. Idempotent: removing an id that was already
    /// removed, or never issued, is a no-op.
    pub fn unsubscribe(&self, id: SubscriberId) {
        let mut state = self.state.lock().unwrap();
        let before = state.subscribers.len();
        state.subscribers.retain(|(sid, _)| *sid != id);
        if state.subscribers.len() < before {
            debug!(id = id.0, "unsubscribed");
        }
    }

    /// Number of currently registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().unwrap().subscribers.len()
    }

    /// The notification currently held by the hub, if any has been
    /// published.
    pub fn current(&self) -> Option<Arc<dyn Notification>> {
        self.state.lock().unwrap().current.clone()
    }

    /// The content of the current notification.
    ///
    /// Returns `HubError::Empty` before the first publish; an empty string
    /// is a valid content and is not conflated with this condition.
    pub fn current_content(&self) -> Result<String, HubError> {
        self.state
            .lock()
            .unwrap()
            .current
            .as_ref()
            .map(|n| n.content())
            .ok_or(HubError::Empty)
    }

    /// True when the calling task is the one currently driving a fan-out.
    pub(crate) fn publishing_from_current_task(&self) -> bool {
        let caller = tokio::task::try_id();
        caller.is_some() && *self.active_publisher.lock().unwrap() == caller
    }

    /// Replaces the current notification and notifies every subscriber, in
    /// subscription order, before returning.
    ///
    /// The subscriber table is snapshotted at the start of the cycle:
    /// subscribers added during a callback are first notified on the next
    /// publish, and subscribers removed during a callback are skipped for
    /// the rest of the cycle. Concurrent publishes from other tasks are
    /// serialized; a re-entrant publish from within a callback is rejected
    /// with `HubError::ReentrantPublish`.
    #[instrument(skip_all, fields(subscribers = self.subscriber_count()))]
    pub async fn publish(&self, notification: Arc<dyn Notification>) -> Result<(), HubError> {
        if self.publishing_from_current_task() {
            return Err(HubError::ReentrantPublish);
        }

        let _gate = self.publish_gate.lock().await;
        *self.active_publisher.lock().unwrap() = tokio::task::try_id();

        let (content, snapshot) = {
            let mut state = self.state.lock().unwrap();
            state.current = Some(notification.clone());
            (notification.content(), state.subscribers.clone())
        };

        for (id, subscriber) in snapshot {
            if !self.is_subscribed(id) {
                trace!(subscriber = subscriber.name(), "removed mid-cycle, skipping");
                continue;
            }
            trace!(subscriber = subscriber.name(), "notifying");
            let cx = NotifyContext::new(&content);
            subscriber.on_notify(&cx).await;
        }

        *self.active_publisher.lock().unwrap() = None;
        Ok(())
    }

    fn is_subscribed(&self, id: SubscriberId) -> bool {
        self.state
            .lock()
            .unwrap()
            .subscribers
            .iter()
            .any(|(sid, _)| *sid == id)
    }
}

impl Default for NotificationHub {
    fn default() -> Self {
        Self::new()
    }
}
