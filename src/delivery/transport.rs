//! The built-in console transport.
//!
//! Real deployments supply provider-backed `Transport` implementations;
//! this one writes the would-be delivery to the console so the pipeline can
//! run end to end without external services.

use crate::core::Transport;
use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

pub struct ConsoleTransport {
    channel: &'static str,
}

impl ConsoleTransport {
    pub fn new(channel: &'static str) -> Self {
        Self { channel }
    }
}

#[async_trait]
impl Transport for ConsoleTransport {
    async fn send(&self, destination: &str, content: &str) -> Result<()> {
        info!(channel = self.channel, destination, "delivering");
        println!("[{}] sent to {}:\n{}", self.channel, destination, content);
        Ok(())
    }
}
