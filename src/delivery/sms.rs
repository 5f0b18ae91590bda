//! SMS delivery channel.

use crate::core::{DeliveryStrategy, Transport};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Delivers notification content to a single phone number through the
/// configured transport.
pub struct SmsStrategy {
    number: String,
    transport: Arc<dyn Transport>,
}

impl SmsStrategy {
    pub fn new(number: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            number: number.into(),
            transport,
        }
    }
}

#[async_trait]
impl DeliveryStrategy for SmsStrategy {
    fn name(&self) -> &str {
        "sms"
    }

    async fn deliver(&self, content: &str) -> Result<()> {
        self.transport
            .send(&self.number, content)
            .await
            .with_context(|| format!("sms delivery to {}", self.number))
    }
}
