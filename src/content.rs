//! The notification content model.
//!
//! Content is built bottom-up: a `BasicNotification` carries the raw message
//! and decorating layers wrap it, each contributing its own fragment around
//! the inner value's content. Layers own what they wrap, so a finished
//! notification is a single immutable value that can be published as a whole.

use crate::core::Notification;
use chrono::Local;

/// The innermost layer: a plain message with no decoration.
pub struct BasicNotification {
    message: String,
}

impl BasicNotification {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Notification for BasicNotification {
    fn content(&self) -> String {
        self.message.clone()
    }
}

/// Prefixes the wrapped content with `[<timestamp>] `.
///
/// The timestamp is captured once, at construction, so `content()` stays
/// pure no matter when or how often it is rendered.
pub struct TimestampDecorator {
    inner: Box<dyn Notification>,
    timestamp: String,
}

impl TimestampDecorator {
    /// Stamps the wrapped notification with the current local time.
    pub fn new(inner: impl Notification + 'static) -> Self {
        Self::at(inner, Local::now().format("%Y-%m-%d %H:%M:%S").to_string())
    }

    /// Stamps the wrapped notification with a caller-supplied timestamp.
    pub fn at(inner: impl Notification + 'static, timestamp: impl Into<String>) -> Self {
        Self {
            inner: Box::new(inner),
            timestamp: timestamp.into(),
        }
    }
}

impl Notification for TimestampDecorator {
    fn content(&self) -> String {
        format!("[{}] {}", self.timestamp, self.inner.content())
    }
}

/// Appends `\n-- <signature>\n\n` to the wrapped content.
pub struct SignatureDecorator {
    inner: Box<dyn Notification>,
    signature: String,
}

impl SignatureDecorator {
    pub fn new(inner: impl Notification + 'static, signature: impl Into<String>) -> Self {
        Self {
            inner: Box::new(inner),
            signature: signature.into(),
        }
    }
}

impl Notification for SignatureDecorator {
    fn content(&self) -> String {
        format!("{}\n-- {}\n\n", self.inner.content(), self.signature)
    }
}
