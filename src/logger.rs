//! A simple subscriber that logs every published notification.
//!
//! This serves as a basic observer to validate the publish pipeline and is
//! handy for debugging; it also makes "the logger was notified" an
//! observable fact through its notification counter.

use crate::core::{NotifyContext, Subscriber};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::info;

pub struct LoggingSubscriber {
    notified: AtomicUsize,
}

impl LoggingSubscriber {
    pub fn new() -> Self {
        Self {
            notified: AtomicUsize::new(0),
        }
    }

    /// How many notifications this subscriber has reacted to.
    pub fn times_notified(&self) -> usize {
        self.notified.load(Ordering::SeqCst)
    }
}

impl Default for LoggingSubscriber {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Subscriber for LoggingSubscriber {
    fn name(&self) -> &str {
        "logger"
    }

    async fn on_notify(&self, cx: &NotifyContext<'_>) {
        self.notified.fetch_add(1, Ordering::SeqCst);
        info!(content = cx.current_content(), "notification published");
    }
}
