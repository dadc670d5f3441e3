//! Tool registry with JSON schemas
//!
//! Tools:
//! - add_todo: Create a todo item
//! - get_todo_list: List the most recent items
//! - get_overdue_todos: Items older than the overdue window

use crate::gateway::types::ToolSchema;
use serde_json::json;
use std::collections::BTreeMap;

pub const ADD_TODO: &str = "add_todo";
pub const GET_TODO_LIST: &str = "get_todo_list";
pub const GET_OVERDUE_TODOS: &str = "get_overdue_todos";

/// Tool registry
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    /// Map of tool name to schema, ordered by name
    tools: BTreeMap<String, ToolSchema>,
}

impl ToolRegistry {
    /// Create new tool registry with all tools
    pub fn new() -> Self {
        let mut registry = Self {
            tools: BTreeMap::new(),
        };

        registry.register_add_todo();
        registry.register_get_todo_list();
        registry.register_get_overdue_todos();

        registry
    }

    fn register_add_todo(&mut self) {
        let schema = ToolSchema::new(
            ADD_TODO,
            "Add a new todo item for the user",
            json!({
                "type": "object",
                "properties": {
                    "name": {
                        "type": "string",
                        "description": "What needs to be done"
                    },
                    "priority": {
                        "type": "string",
                        "enum": ["high", "medium", "low"],
                        "description": "Priority of the item",
                        "default": "medium"
                    }
                },
                "required": ["name"]
            }),
            false,
        );
        self.tools.insert(ADD_TODO.to_string(), schema);
    }

    fn register_get_todo_list(&mut self) {
        let schema = ToolSchema::new(
            GET_TODO_LIST,
            "Get the user's most recent todo items",
            json!({
                "type": "object",
                "properties": {
                    "length": {
                        "type": "integer",
                        "description": "Number of items to return",
                        "default": 5
                    }
                }
            }),
            true,
        );
        self.tools.insert(GET_TODO_LIST.to_string(), schema);
    }

    fn register_get_overdue_todos(&mut self) {
        let schema = ToolSchema::new(
            GET_OVERDUE_TODOS,
            "Get up to five todo items created more than three days ago and still open",
            json!({
                "type": "object",
                "properties": {}
            }),
            true,
        );
        self.tools.insert(GET_OVERDUE_TODOS.to_string(), schema);
    }

    /// Get tool schema by name
    pub fn get(&self, name: &str) -> Option<&ToolSchema> {
        self.tools.get(name)
    }

    /// Check if tool exists
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Get all tool names
    pub fn tool_names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }

    /// Get all tool schemas
    pub fn schemas(&self) -> Vec<&ToolSchema> {
        self.tools.values().collect()
    }

    /// Get read-only tool names
    pub fn read_only_tools(&self) -> Vec<String> {
        self.tools
            .iter()
            .filter(|(_, schema)| schema.read_only)
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
