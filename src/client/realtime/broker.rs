//! Message-broker port
//!
//! The QnA feature talks to a publish/subscribe broker addressed by
//! destination strings. Framing, reconnection and delivery belong to the
//! broker client behind this trait; the app only subscribes and publishes.
//! [`MemoryBroker`] is an in-process implementation for tests and local runs.

use crate::client::error::ClientError;
use async_trait::async_trait;
use futures_util::stream::{self, BoxStream, StreamExt};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;

/// Message delivered on a destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub destination: String,
    pub body: String,
}

/// Live subscription to one destination
#[derive(Debug)]
pub struct Subscription {
    destination: String,
    rx: mpsc::UnboundedReceiver<Frame>,
}

impl Subscription {
    pub fn new(destination: impl Into<String>, rx: mpsc::UnboundedReceiver<Frame>) -> Self {
        Self {
            destination: destination.into(),
            rx,
        }
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Next frame; `None` once the broker side is gone
    pub async fn next(&mut self) -> Option<Frame> {
        self.rx.recv().await
    }

    pub fn into_stream(self) -> BoxStream<'static, Frame> {
        stream::unfold(self, |mut sub| async move {
            let frame = sub.next().await?;
            Some((frame, sub))
        })
        .boxed()
    }
}

#[async_trait]
pub trait MessageBroker: Send + Sync {
    async fn subscribe(&self, destination: &str) -> Result<Subscription, ClientError>;
    async fn publish(&self, destination: &str, body: String) -> Result<(), ClientError>;
}

/// In-process broker: every published frame goes to the current subscribers
/// of its destination and is also kept in a log
#[derive(Debug, Default)]
pub struct MemoryBroker {
    subscribers: Mutex<HashMap<String, Vec<mpsc::UnboundedSender<Frame>>>>,
    published: Mutex<Vec<Frame>>,
}

impl MemoryBroker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every frame published so far, oldest first
    pub fn published(&self) -> Vec<Frame> {
        lock(&self.published).clone()
    }

    pub fn subscriber_count(&self, destination: &str) -> usize {
        lock(&self.subscribers)
            .get(destination)
            .map(|senders| senders.iter().filter(|tx| !tx.is_closed()).count())
            .unwrap_or(0)
    }
}

#[async_trait]
impl MessageBroker for MemoryBroker {
    async fn subscribe(&self, destination: &str) -> Result<Subscription, ClientError> {
        let (tx, rx) = mpsc::unbounded_channel();
        lock(&self.subscribers)
            .entry(destination.to_string())
            .or_default()
            .push(tx);
        tracing::debug!("[BROKER] Subscribed to {}", destination);
        Ok(Subscription::new(destination, rx))
    }

    async fn publish(&self, destination: &str, body: String) -> Result<(), ClientError> {
        let frame = Frame {
            destination: destination.to_string(),
            body,
        };
        if let Some(senders) = lock(&self.subscribers).get_mut(destination) {
            senders.retain(|tx| tx.send(frame.clone()).is_ok());
        }
        lock(&self.published).push(frame);
        Ok(())
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
