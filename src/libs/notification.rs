//! Live notification buffering.
//!
//! The server pushes two independent kinds of events: announcements and leave
//! status changes for the logged-in user. [`NotificationService`] keeps, per
//! [`Category`], the events pushed since the owning view was last opened so
//! the UI can show an unread badge, and hands them over on [`drain`].
//!
//! ## Lifecycle
//!
//! ```text
//!   subscribe ──▶ Idle ──push──▶ Accumulating ──push──▶ Accumulating
//!                  ▲                  │
//!                  └────── drain ─────┘
//!   drop(Subscription) / shutdown ──▶ buffer discarded
//! ```
//!
//! - One transport subscription per category. Subscribing again replaces the
//!   previous one; buffered events are kept.
//! - Every event instance reaches the buffer at most once. Listeners of a
//!   replaced subscription are ignored and a per-session seen-set drops
//!   duplicates by identity. The seen-set keeps the last [`SEEN_CAPACITY`]
//!   identities, so a redelivery older than that is buffered again.
//! - Dropping the current [`Subscription`] unsubscribes from the transport and
//!   discards the buffer. Dropping the last service handle unsubscribes every
//!   category that is still live.
//!
//! The service is an explicit handle passed to whoever needs it; clones share
//! state.
//!
//! [`drain`]: NotificationService::drain

use crate::libs::config::PushConfig;
use crate::libs::feed::Identified;
use crate::libs::transport::{Listener, Topic, Transport, TransportId};
use anyhow::Result;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Announcement,
    LeaveStatus,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Announcement, Category::LeaveStatus];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Announcement => write!(f, "announcement"),
            Category::LeaveStatus => write!(f, "leave status"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: u64,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub date: String,
}

/// Status change of one of the user's leave requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveStatusUpdate {
    /// Leave request id.
    pub id: u64,
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    /// Any additional fields the server sends along.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PushEvent {
    Announcement(Announcement),
    LeaveStatus(LeaveStatusUpdate),
}

/// Identity of a pushed event instance.
///
/// A leave request may change status several times, so its identity includes
/// the status it moved to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventKey {
    Announcement(u64),
    LeaveStatus(u64, String),
}

impl PushEvent {
    /// Parses a raw payload received on the topic of `category`.
    pub fn from_payload(category: Category, payload: Value) -> serde_json::Result<Self> {
        match category {
            Category::Announcement => serde_json::from_value(payload).map(PushEvent::Announcement),
            Category::LeaveStatus => serde_json::from_value(payload).map(PushEvent::LeaveStatus),
        }
    }

    pub fn category(&self) -> Category {
        match self {
            PushEvent::Announcement(_) => Category::Announcement,
            PushEvent::LeaveStatus(_) => Category::LeaveStatus,
        }
    }
}

impl Identified for PushEvent {
    type Key = EventKey;

    fn key(&self) -> EventKey {
        match self {
            PushEvent::Announcement(a) => EventKey::Announcement(a.id),
            PushEvent::LeaveStatus(l) => EventKey::LeaveStatus(l.id, l.status.clone()),
        }
    }
}

impl Identified for Announcement {
    type Key = u64;

    fn key(&self) -> u64 {
        self.id
    }
}

/// Push topics for each category, resolved for one user.
#[derive(Debug, Clone, PartialEq)]
pub struct Topics {
    announcement: Topic,
    leave_status: Topic,
}

impl Topics {
    pub fn from_config(config: &PushConfig) -> Self {
        Self {
            announcement: Topic::new(&config.announcement_channel, &config.announcement_event),
            leave_status: Topic::new(
                format!("{}.{}", config.leave_status_channel, config.user_id),
                &config.leave_status_event,
            ),
        }
    }

    pub fn get(&self, category: Category) -> &Topic {
        match category {
            Category::Announcement => &self.announcement,
            Category::LeaveStatus => &self.leave_status,
        }
    }
}

/// Number of most recent event identities remembered per category.
pub const SEEN_CAPACITY: usize = 1024;

type EventCallback = Arc<dyn Fn(&PushEvent) + Send + Sync>;

/// Identities of the most recent events, oldest evicted first.
#[derive(Default)]
struct SeenKeys {
    keys: HashSet<EventKey>,
    order: VecDeque<EventKey>,
}

impl SeenKeys {
    /// Records `key`. Returns `false` if it is already remembered.
    fn insert(&mut self, key: EventKey) -> bool {
        if self.keys.contains(&key) {
            return false;
        }
        if self.order.len() == SEEN_CAPACITY {
            if let Some(oldest) = self.order.pop_front() {
                self.keys.remove(&oldest);
            }
        }
        self.keys.insert(key.clone());
        self.order.push_back(key);
        true
    }
}

struct CategoryState {
    generation: u64,
    transport_id: TransportId,
    buffer: Vec<PushEvent>,
    seen: SeenKeys,
}

struct Inner {
    transport: Arc<dyn Transport>,
    topics: Topics,
    next_generation: AtomicU64,
    categories: Mutex<HashMap<Category, CategoryState>>,
}

impl Inner {
    fn deliver(&self, category: Category, generation: u64, payload: Value, on_event: &EventCallback) {
        let event = match PushEvent::from_payload(category, payload) {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!(%category, error = %e, "dropping malformed push payload");
                return;
            }
        };

        {
            let mut categories = self.categories.lock();
            let Some(state) = categories.get_mut(&category) else {
                return;
            };
            if state.generation != generation {
                tracing::debug!(%category, generation, "ignoring event from a replaced subscription");
                return;
            }
            if !state.seen.insert(event.key()) {
                tracing::debug!(%category, key = ?event.key(), "ignoring duplicate event");
                return;
            }
            state.buffer.push(event.clone());
        }

        on_event(&event);
    }

    fn release(&self, category: Category, generation: u64) {
        let removed = {
            let mut categories = self.categories.lock();
            match categories.get(&category) {
                Some(state) if state.generation == generation => categories.remove(&category),
                _ => None,
            }
        };
        if let Some(state) = removed {
            self.transport.unsubscribe(state.transport_id);
            tracing::debug!(%category, discarded = state.buffer.len(), "notification subscription torn down");
        }
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        for (category, state) in self.categories.get_mut().drain() {
            self.transport.unsubscribe(state.transport_id);
            tracing::debug!(%category, discarded = state.buffer.len(), "notification subscription torn down");
        }
    }
}

/// Session-wide owner of the per-category notification buffers.
#[derive(Clone)]
pub struct NotificationService {
    inner: Arc<Inner>,
}

impl NotificationService {
    pub fn new(transport: Arc<dyn Transport>, topics: Topics) -> Self {
        Self {
            inner: Arc::new(Inner {
                transport,
                topics,
                next_generation: AtomicU64::new(1),
                categories: Mutex::new(HashMap::new()),
            }),
        }
    }

    /// Subscribes to live events of `category`.
    ///
    /// `on_event` runs for every event that enters the buffer, after it has
    /// been buffered. A live subscription for the same category is replaced.
    pub fn subscribe<F>(&self, category: Category, on_event: F) -> Result<Subscription>
    where
        F: Fn(&PushEvent) + Send + Sync + 'static,
    {
        let generation = self.inner.next_generation.fetch_add(1, Ordering::Relaxed);
        let on_event: EventCallback = Arc::new(on_event);
        let weak = Arc::downgrade(&self.inner);
        let listener: Listener = Arc::new(move |payload| {
            if let Some(inner) = weak.upgrade() {
                inner.deliver(category, generation, payload, &on_event);
            }
        });

        let topic = self.inner.topics.get(category);
        let transport_id = self.inner.transport.subscribe(topic, listener)?;

        let replaced = {
            let mut categories = self.inner.categories.lock();
            match categories.get_mut(&category) {
                Some(state) => {
                    state.generation = generation;
                    Some(std::mem::replace(&mut state.transport_id, transport_id))
                }
                None => {
                    categories.insert(
                        category,
                        CategoryState {
                            generation,
                            transport_id,
                            buffer: Vec::new(),
                            seen: SeenKeys::default(),
                        },
                    );
                    None
                }
            }
        };

        if let Some(previous) = replaced {
            self.inner.transport.unsubscribe(previous);
            tracing::debug!(%category, %topic, "replaced live subscription");
        } else {
            tracing::debug!(%category, %topic, "subscribed");
        }

        Ok(Subscription {
            inner: Arc::downgrade(&self.inner),
            category,
            generation,
        })
    }

    /// Ends a subscription. Same as dropping it.
    pub fn unsubscribe(&self, subscription: Subscription) {
        drop(subscription);
    }

    /// Returns the buffered events in receipt order and empties the buffer.
    pub fn drain(&self, category: Category) -> Vec<PushEvent> {
        let drained = self
            .inner
            .categories
            .lock()
            .get_mut(&category)
            .map(|state| std::mem::take(&mut state.buffer))
            .unwrap_or_default();
        tracing::debug!(%category, count = drained.len(), "drained notifications");
        drained
    }

    /// Called when the view owning `category` is opened. Idempotent.
    pub fn on_view_opened(&self, category: Category) -> Vec<PushEvent> {
        self.drain(category)
    }

    /// Number of unseen events, for badges.
    pub fn pending(&self, category: Category) -> usize {
        self.inner.categories.lock().get(&category).map_or(0, |state| state.buffer.len())
    }

    pub fn is_subscribed(&self, category: Category) -> bool {
        self.inner.categories.lock().contains_key(&category)
    }

    /// Tears down every category, e.g. on logout.
    pub fn shutdown(&self) {
        let states: Vec<(Category, CategoryState)> = self.inner.categories.lock().drain().collect();
        for (category, state) in states {
            self.inner.transport.unsubscribe(state.transport_id);
            tracing::debug!(%category, discarded = state.buffer.len(), "notification subscription torn down");
        }
    }
}

/// A live category subscription. Unsubscribes when dropped.
#[must_use = "dropping a subscription unsubscribes it immediately"]
pub struct Subscription {
    inner: Weak<Inner>,
    category: Category,
    generation: u64,
}

impl Subscription {
    pub fn category(&self) -> Category {
        self.category
    }

    /// `false` once the subscription was replaced or torn down.
    pub fn is_active(&self) -> bool {
        let Some(inner) = self.inner.upgrade() else {
            return false;
        };
        let categories = inner.categories.lock();
        categories.get(&self.category).is_some_and(|state| state.generation == self.generation)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.release(self.category, self.generation);
        }
    }
}
