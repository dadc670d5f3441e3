//! The three todo tools
//!
//! Each tool has a `try_*` form that returns the underlying `Result` and a
//! plain form that never fails: errors are logged and turned into an empty
//! list or an `{"error": ...}` map.

use crate::errors::Result;
use crate::gateway::client::TodoApi;
use crate::gateway::overdue::OverduePolicy;
use crate::store::types::{TodoItem, DEFAULT_LIST_LENGTH};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Priority used when the caller gives none
pub const DEFAULT_PRIORITY: &str = "medium";

/// Result of `add_todo`: the created item, or an error description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AddTodoOutcome {
    Created(TodoItem),
    Failed { error: String },
}

impl AddTodoOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, AddTodoOutcome::Created(_))
    }
}

/// Tool implementations over any todo backend
#[derive(Debug, Clone)]
pub struct TodoTools<A> {
    api: A,
    policy: OverduePolicy,
}

impl<A: TodoApi> TodoTools<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            policy: OverduePolicy::default(),
        }
    }

    /// Override the overdue window and cap
    pub fn with_policy(mut self, policy: OverduePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn policy(&self) -> OverduePolicy {
        self.policy
    }

    pub async fn try_add_todo(&self, name: &str, priority: &str) -> Result<TodoItem> {
        let item = self.api.add(name, priority).await?;
        info!(id = %item.id, "add_todo created item");
        Ok(item)
    }

    /// Add an item; failures become `{"error": ...}`
    pub async fn add_todo(&self, name: &str, priority: &str) -> AddTodoOutcome {
        match self.try_add_todo(name, priority).await {
            Ok(item) => AddTodoOutcome::Created(item),
            Err(e) => {
                warn!(error = %e, "add_todo failed");
                AddTodoOutcome::Failed {
                    error: e.to_string(),
                }
            }
        }
    }

    pub async fn try_get_todo_list(&self, length: i64) -> Result<Vec<TodoItem>> {
        self.api.list(length).await
    }

    /// List items; failures become an empty list
    pub async fn get_todo_list(&self, length: i64) -> Vec<TodoItem> {
        self.try_get_todo_list(length).await.unwrap_or_else(|e| {
            warn!(error = %e, "get_todo_list failed");
            Vec::new()
        })
    }

    pub async fn try_get_overdue_todos(&self) -> Result<Vec<TodoItem>> {
        self.try_get_overdue_todos_at(Utc::now()).await
    }

    /// Overdue view relative to a fixed instant
    pub async fn try_get_overdue_todos_at(&self, now: DateTime<Utc>) -> Result<Vec<TodoItem>> {
        let items = self.try_get_todo_list(DEFAULT_LIST_LENGTH).await?;
        Ok(self.policy.filter(items, now))
    }

    /// Overdue items among the most recent ones; failures become an empty list
    pub async fn get_overdue_todos(&self) -> Vec<TodoItem> {
        self.try_get_overdue_todos().await.unwrap_or_else(|e| {
            warn!(error = %e, "get_overdue_todos failed");
            Vec::new()
        })
    }
}
