//! Core domain types and service traits for the notification bus
//!
//! This module defines the fundamental trait contracts that govern component
//! interactions throughout the application: composable notification content,
//! hub subscribers, channel delivery strategies, and the outbound transport
//! boundary.

use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;

/// A composable, immutable piece of notification content.
///
/// Implementations must produce their final text deterministically and
/// without side effects; decorating layers call `content()` on the value
/// they wrap and never inspect its representation.
pub trait Notification: Send + Sync {
    /// Renders the final content of this notification as text.
    fn content(&self) -> String;
}

impl<T: Notification + ?Sized> Notification for Box<T> {
    fn content(&self) -> String {
        (**self).content()
    }
}

/// Handle returned by `NotificationHub::subscribe`, used for explicit
/// removal. Ids are never reused by a hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(pub(crate) u64);

/// The view of the hub's state handed to a subscriber while a publish is in
/// flight. It borrows the freshly published content and is only valid for
/// the duration of the `on_notify` call.
pub struct NotifyContext<'a> {
    content: &'a str,
}

impl<'a> NotifyContext<'a> {
    pub(crate) fn new(content: &'a str) -> Self {
        Self { content }
    }

    /// The content of the notification currently held by the hub.
    pub fn current_content(&self) -> &str {
        self.content
    }
}

/// An observer of published notifications.
///
/// Subscribers register with exactly one hub and are invoked in subscription
/// order on every publish until explicitly unsubscribed.
#[async_trait]
pub trait Subscriber: Send + Sync {
    /// A short, descriptive name for the subscriber (e.g., "logger").
    /// Used for logging.
    fn name(&self) -> &str;

    /// Reacts to a newly published notification.
    async fn on_notify(&self, cx: &NotifyContext<'_>);
}

/// Delivers final notification text to one channel.
///
/// A strategy is bound to its destination at construction and does not
/// change targets afterwards. Failures are reported to the caller; the
/// strategy itself does not retry.
#[async_trait]
pub trait DeliveryStrategy: Send + Sync {
    /// A unique, descriptive name for the channel (e.g., "email", "sms").
    /// Used for logging and metrics.
    fn name(&self) -> &str;

    /// Sends the content through this channel.
    async fn deliver(&self, content: &str) -> Result<()>;
}

/// The outbound boundary a real deployment must supply per channel.
///
/// Strategies call this within a delivery attempt; any non-success outcome
/// is treated as an isolated per-strategy failure by the dispatch engine.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `content` to `destination` and reports the outcome.
    async fn send(&self, destination: &str, content: &str) -> Result<()>;
}

/// Errors reported by the hub's publish and read operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HubError {
    /// `current_content` was called before the first publish. Distinct from
    /// a notification whose content happens to be empty.
    #[error("no notification has been published yet")]
    Empty,

    /// `publish` was called from within a subscriber callback of the same
    /// publish cycle. Re-entrant publishes are rejected, not queued.
    #[error("publish re-entered from a subscriber callback")]
    ReentrantPublish,
}
