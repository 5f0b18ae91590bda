//! Email delivery channel.

use crate::core::{DeliveryStrategy, Transport};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Delivers notification content to a single email address through the
/// configured transport.
pub struct EmailStrategy {
    address: String,
    transport: Arc<dyn Transport>,
}

impl EmailStrategy {
    pub fn new(address: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            address: address.into(),
            transport,
        }
    }
}

#[async_trait]
impl DeliveryStrategy for EmailStrategy {
    fn name(&self) -> &str {
        "email"
    }

    async fn deliver(&self, content: &str) -> Result<()> {
        self.transport
            .send(&self.address, content)
            .await
            .with_context(|| format!("email delivery to {}", self.address))
    }
}
