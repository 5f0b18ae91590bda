//! The notification service: the coordinator callers publish through.
//!
//! The service owns one hub and an append-only, in-memory log of every
//! notification it has accepted. It is constructed explicitly and passed to
//! whoever needs it; a deployment wires exactly one.

use crate::core::{HubError, Notification};
use crate::hub::NotificationHub;
use std::sync::{Arc, Mutex};
use tracing::instrument;

pub struct NotificationService {
    hub: Arc<NotificationHub>,
    history: Mutex<Vec<Arc<dyn Notification>>>,
    /// Keeps the history log ordered identically to the hub's sequence of
    /// current values when publishes race.
    publish_gate: tokio::sync::Mutex<()>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self::with_hub(Arc::new(NotificationHub::new()))
    }

    pub fn with_hub(hub: Arc<NotificationHub>) -> Self {
        Self {
            hub,
            history: Mutex::new(Vec::new()),
            publish_gate: tokio::sync::Mutex::new(()),
        }
    }

    /// The hub this service publishes through. Subscribers register here.
    pub fn hub(&self) -> &Arc<NotificationHub> {
        &self.hub
    }

    /// Publishes a finished notification: forwards it to the hub, driving
    /// the full subscriber fan-out, then records it in the history log.
    /// A rejected publish leaves the log untouched.
    pub async fn publish(&self, notification: impl Notification + 'static) -> Result<(), HubError> {
        self.publish_shared(Arc::new(notification)).await
    }

    /// `publish` for content that is already shared.
    #[instrument(skip_all)]
    pub async fn publish_shared(
        &self,
        notification: Arc<dyn Notification>,
    ) -> Result<(), HubError> {
        if self.hub.publishing_from_current_task() {
            return Err(HubError::ReentrantPublish);
        }

        let _gate = self.publish_gate.lock().await;
        self.hub.publish(notification.clone()).await?;
        self.history.lock().unwrap().push(notification);
        metrics::counter!("notifications.published").increment(1);
        Ok(())
    }

    /// A snapshot of every notification published so far, oldest first.
    pub fn history(&self) -> Vec<Arc<dyn Notification>> {
        self.history.lock().unwrap().clone()
    }

    pub fn published_count(&self) -> usize {
        self.history.lock().unwrap().len()
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}
