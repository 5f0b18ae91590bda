#![allow(dead_code)]
use async_trait::async_trait;
use notibus::core::{DeliveryStrategy, NotifyContext, Subscriber};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

/// A mock strategy that records every content string it is asked to
/// deliver.
pub struct RecordingStrategy {
    label: String,
    pub delivered: Arc<Mutex<Vec<String>>>,
}

impl RecordingStrategy {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            delivered: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn delivered(&self) -> Vec<String> {
        self.delivered.lock().unwrap().clone()
    }
}

#[async_trait]
impl DeliveryStrategy for RecordingStrategy {
    fn name(&self) -> &str {
        &self.label
    }

    async fn deliver(&self, content: &str) -> anyhow::Result<()> {
        self.delivered.lock().unwrap().push(content.to_string());
        Ok(())
    }
}

/// A mock strategy that always fails, counting its attempts.
pub struct FailingStrategy {
    pub attempts: Arc<AtomicUsize>,
}

impl FailingStrategy {
    pub fn new() -> Self {
        Self {
            attempts: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DeliveryStrategy for FailingStrategy {
    fn name(&self) -> &str {
        "failing_mock"
    }

    async fn deliver(&self, _content: &str) -> anyhow::Result<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        anyhow::bail!("destination unreachable")
    }
}

/// A mock subscriber that counts how many times it was notified.
pub struct CountingSubscriber {
    pub count: Arc<AtomicUsize>,
}

impl CountingSubscriber {
    pub fn new() -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Subscriber for CountingSubscriber {
    fn name(&self) -> &str {
        "counting_mock"
    }

    async fn on_notify(&self, _cx: &NotifyContext<'_>) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}
