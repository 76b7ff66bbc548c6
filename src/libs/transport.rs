//! Push transport abstraction.
//!
//! The notification layer does not talk to a socket itself. It asks a
//! [`Transport`] to deliver payloads published on a [`Topic`] (channel plus
//! event name) to a listener, and to stop doing so on `unsubscribe`.
//!
//! [`LocalTransport`] is an in-process implementation: `publish` hands the
//! payload to every matching listener in subscription order. Embedders that
//! bridge a real push connection feed it from their receive loop.

use anyhow::Result;
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Callback receiving the raw JSON payload of a pushed event.
pub type Listener = Arc<dyn Fn(Value) + Send + Sync>;

/// Channel name plus event name, the addressing unit of the push API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Topic {
    pub channel: String,
    pub event: String,
}

impl Topic {
    pub fn new(channel: impl Into<String>, event: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            event: event.into(),
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.channel, self.event)
    }
}

/// Handle of one listener registration on a transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransportId(pub u64);

pub trait Transport: Send + Sync {
    /// Starts delivering payloads published on `topic` to `listener`.
    fn subscribe(&self, topic: &Topic, listener: Listener) -> Result<TransportId>;

    /// Stops delivery for `id`. Unknown ids are ignored.
    fn unsubscribe(&self, id: TransportId);
}

#[derive(Default)]
pub struct LocalTransport {
    next_id: AtomicU64,
    listeners: Mutex<BTreeMap<TransportId, (Topic, Listener)>>,
}

impl LocalTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers `payload` to every listener on the topic and returns how many
    /// received it.
    pub fn publish(&self, topic: &Topic, payload: Value) -> usize {
        // Listeners run outside the lock so they may (un)subscribe themselves.
        let targets: Vec<Listener> = self
            .listeners
            .lock()
            .values()
            .filter(|(t, _)| t == topic)
            .map(|(_, listener)| listener.clone())
            .collect();

        tracing::debug!(%topic, listeners = targets.len(), "publishing push event");
        for listener in &targets {
            listener(payload.clone());
        }
        targets.len()
    }

    pub fn listener_count(&self, topic: &Topic) -> usize {
        self.listeners.lock().values().filter(|(t, _)| t == topic).count()
    }
}

impl Transport for LocalTransport {
    fn subscribe(&self, topic: &Topic, listener: Listener) -> Result<TransportId> {
        let id = TransportId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners.lock().insert(id, (topic.clone(), listener));
        tracing::debug!(%topic, id = id.0, "transport subscription added");
        Ok(id)
    }

    fn unsubscribe(&self, id: TransportId) {
        if let Some((topic, _)) = self.listeners.lock().remove(&id) {
            tracing::debug!(%topic, id = id.0, "transport subscription removed");
        }
    }
}
