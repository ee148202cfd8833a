//! Event publisher trait and in-memory implementation.

use std::collections::HashMap;
use std::sync::RwLock;

/// Error raised by a publisher backend.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("publisher unavailable: {0}")]
    Unavailable(String),

    #[error("publish failed: {0}")]
    Send(String),
}

/// One outbound message: topic, propagation headers, serialized payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub topic: String,
    pub headers: HashMap<String, String>,
    pub payload: String,
}

/// Hands messages to the downstream transport.
pub trait EventPublisher: Send + Sync {
    fn publish(&self, message: OutboundMessage) -> Result<(), PublishError>;
}

/// Publisher that keeps messages in memory, for local runs and tests.
#[derive(Debug, Default)]
pub struct InMemoryPublisher {
    messages: RwLock<Vec<OutboundMessage>>,
}

impl InMemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<OutboundMessage> {
        self.messages
            .read()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }
}

impl EventPublisher for InMemoryPublisher {
    fn publish(&self, message: OutboundMessage) -> Result<(), PublishError> {
        let mut messages = self
            .messages
            .write()
            .map_err(|_| PublishError::Unavailable("store lock poisoned".to_string()))?;
        messages.push(message);
        Ok(())
    }
}
