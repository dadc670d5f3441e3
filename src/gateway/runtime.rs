//! Tool runtime coordinator
//!
//! Validates the tool name against the registry, decodes arguments,
//! routes to the tool and wraps the answer in a `ToolResult`.

use crate::errors::{Result, TodoError};
use crate::gateway::client::{StoreClient, TodoApi};
use crate::gateway::registry::{ToolRegistry, ADD_TODO, GET_OVERDUE_TODOS, GET_TODO_LIST};
use crate::gateway::tools::{AddTodoOutcome, TodoTools, DEFAULT_PRIORITY};
use crate::gateway::types::ToolResult;
use crate::store::types::DEFAULT_LIST_LENGTH;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::time::Instant;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct AddTodoArgs {
    name: String,
    #[serde(default = "default_priority")]
    priority: String,
}

#[derive(Debug, Deserialize)]
struct ListArgs {
    #[serde(default = "default_length")]
    length: i64,
}

fn default_priority() -> String {
    DEFAULT_PRIORITY.to_string()
}

fn default_length() -> i64 {
    DEFAULT_LIST_LENGTH
}

/// Tool runtime coordinator
pub struct ToolRuntime<A = StoreClient> {
    tools: TodoTools<A>,
    registry: ToolRegistry,
}

impl<A: TodoApi> ToolRuntime<A> {
    pub fn new(tools: TodoTools<A>) -> Self {
        Self {
            tools,
            registry: ToolRegistry::new(),
        }
    }

    /// Execute a tool by name with JSON arguments.
    ///
    /// Unknown names and undecodable arguments are errors; store failures
    /// are not, they come back as a degraded `ToolResult`.
    pub async fn execute(&self, tool: &str, args: &Value) -> Result<ToolResult> {
        if !self.registry.contains(tool) {
            return Err(TodoError::UnknownTool(tool.to_string()));
        }

        let start = Instant::now();
        debug!(tool, %args, "executing tool");

        let result = match tool {
            ADD_TODO => {
                let args: AddTodoArgs = decode_args(tool, args)?;
                let outcome = self.tools.add_todo(&args.name, &args.priority).await;
                let output = serde_json::to_value(&outcome)?;
                match outcome {
                    AddTodoOutcome::Created(_) => ToolResult::success(tool, output, start.elapsed()),
                    AddTodoOutcome::Failed { error } => {
                        ToolResult::failure(tool, output, error, start.elapsed())
                    }
                }
            }
            GET_TODO_LIST => {
                let args: ListArgs = decode_args(tool, args)?;
                let items = self.tools.get_todo_list(args.length).await;
                ToolResult::success(tool, serde_json::to_value(items)?, start.elapsed())
            }
            GET_OVERDUE_TODOS => {
                let items = self.tools.get_overdue_todos().await;
                ToolResult::success(tool, serde_json::to_value(items)?, start.elapsed())
            }
            other => return Err(TodoError::UnknownTool(other.to_string())),
        };

        debug!(tool, success = result.success, duration_ms = result.duration_ms, "tool finished");
        Ok(result)
    }

    /// Get tool registry
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn tools(&self) -> &TodoTools<A> {
        &self.tools
    }

    /// Check if tool exists
    pub fn has_tool(&self, name: &str) -> bool {
        self.registry.contains(name)
    }
}

/// Decode tool arguments; `null` counts as an empty object
fn decode_args<T: DeserializeOwned>(tool: &str, args: &Value) -> Result<T> {
    let args = if args.is_null() {
        Value::Object(Default::default())
    } else {
        args.clone()
    };

    serde_json::from_value(args).map_err(|e| TodoError::InvalidArguments {
        tool: tool.to_string(),
        reason: e.to_string(),
    })
}
