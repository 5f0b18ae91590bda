#![allow(dead_code)]
use async_trait::async_trait;
use notibus::core::Transport;
use std::sync::{Arc, Mutex};

/// A mock transport that records every (destination, content) pair.
pub struct RecordingTransport {
    pub sent: Arc<Mutex<Vec<(String, String)>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, destination: &str, content: &str) -> anyhow::Result<()> {
        self.sent
            .lock()
            .unwrap()
            .push((destination.to_string(), content.to_string()));
        Ok(())
    }
}

/// A mock transport whose sends always fail.
pub struct FailingTransport;

#[async_trait]
impl Transport for FailingTransport {
    async fn send(&self, _destination: &str, _content: &str) -> anyhow::Result<()> {
        anyhow::bail!("provider rejected the request")
    }
}
