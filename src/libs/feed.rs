//! View-side feeds that combine fetched history with live pushes.
//!
//! A feed is ordered newest first. History loaded from the API and events
//! pushed while the view is open are merged by identity, so an item that
//! arrives through both paths is listed once.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// Something with a stable identity across the REST and push paths.
pub trait Identified {
    type Key: Eq + Hash + Clone + Debug;

    fn key(&self) -> Self::Key;
}

#[derive(Debug, Clone)]
pub struct Feed<T: Identified> {
    items: Vec<T>,
    keys: HashSet<T::Key>,
}

impl<T: Identified> Default for Feed<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            keys: HashSet::new(),
        }
    }
}

impl<T: Identified> Feed<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges fetched history into the feed.
    ///
    /// Items already present are replaced in place by the fetched version,
    /// new ones are appended after the current contents in the order given.
    pub fn load_history(&mut self, history: impl IntoIterator<Item = T>) {
        for item in history {
            let key = item.key();
            if self.keys.contains(&key) {
                if let Some(slot) = self.items.iter_mut().find(|existing| existing.key() == key) {
                    *slot = item;
                }
            } else {
                self.keys.insert(key);
                self.items.push(item);
            }
        }
    }

    /// Prepends a live item. Returns `false` if it was already listed.
    pub fn push_live(&mut self, item: T) -> bool {
        if !self.keys.insert(item.key()) {
            return false;
        }
        self.items.insert(0, item);
        true
    }

    /// Prepends a batch of drained events, oldest first in `items`.
    pub fn push_all_live(&mut self, items: impl IntoIterator<Item = T>) -> usize {
        items.into_iter().map(|item| self.push_live(item)).filter(|added| *added).count()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
