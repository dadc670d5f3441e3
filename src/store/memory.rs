//! In-memory todo collection
//!
//! Append-only, owned by whoever constructs it, shared across handlers by
//! cloning the handle. The lock is never held across an `.await`.

use crate::store::types::TodoItem;
use chrono::{DateTime, SecondsFormat, Utc};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Default)]
struct Inner {
    items: Vec<TodoItem>,
    last_created: Option<DateTime<Utc>>,
}

/// Shared handle to the todo collection
#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    inner: Arc<RwLock<Inner>>,
}

impl TodoStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Return up to `length` items, most recent first.
    ///
    /// `length <= 0` yields nothing. Ties on `created_time` resolve to the
    /// most recently inserted item first.
    pub fn list(&self, length: i64) -> Vec<TodoItem> {
        if length <= 0 {
            return Vec::new();
        }
        let take = usize::try_from(length).unwrap_or(usize::MAX);

        // Insertion order is already created_time order, so reversing is
        // the descending sort.
        self.read().items.iter().rev().take(take).cloned().collect()
    }

    /// Append a new item stamped with the current time
    pub fn add(&self, name: impl Into<String>, priority: impl Into<String>) -> TodoItem {
        self.add_at(name, priority, Utc::now())
    }

    pub(crate) fn add_at(
        &self,
        name: impl Into<String>,
        priority: impl Into<String>,
        now: DateTime<Utc>,
    ) -> TodoItem {
        let mut inner = self.write();

        // Clamp so a clock stepping backwards cannot reorder the collection
        let created = match inner.last_created {
            Some(last) if last > now => last,
            _ => now,
        };
        inner.last_created = Some(created);

        let item = TodoItem {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            priority: priority.into(),
            created_time: format_timestamp(created),
        };
        inner.items.push(item.clone());
        debug!(id = %item.id, total = inner.items.len(), "todo appended");
        item
    }

    /// Number of stored items
    pub fn len(&self) -> usize {
        self.read().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().items.is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Fixed-width UTC timestamp, so lexical order matches time order
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}
