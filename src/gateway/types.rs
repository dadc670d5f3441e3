//! Tool execution types
//!
//! Schemas advertised to the tool host and the result of one tool call.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

/// Result of tool execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Tool name that was executed
    pub tool: String,

    /// JSON payload handed back to the caller
    pub output: Value,

    /// Whether the tool reported success
    pub success: bool,

    /// Execution duration in milliseconds
    pub duration_ms: u64,

    /// Error description if the tool failed
    pub error: Option<String>,
}

impl ToolResult {
    /// Create successful result
    pub fn success(tool: impl Into<String>, output: Value, duration: Duration) -> Self {
        Self {
            tool: tool.into(),
            output,
            success: true,
            duration_ms: duration.as_millis() as u64,
            error: None,
        }
    }

    /// Create failed result; `output` still carries what the caller sees
    pub fn failure(
        tool: impl Into<String>,
        output: Value,
        error: impl Into<String>,
        duration: Duration,
    ) -> Self {
        Self {
            tool: tool.into(),
            output,
            success: false,
            duration_ms: duration.as_millis() as u64,
            error: Some(error.into()),
        }
    }
}

/// Tool schema definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    /// Tool name
    pub name: String,

    /// Tool description
    pub description: String,

    /// Parameter schema (JSON Schema)
    pub parameters: Value,

    /// Whether the tool leaves the store untouched
    pub read_only: bool,
}

impl ToolSchema {
    /// Create new tool schema
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: Value,
        read_only: bool,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
            read_only,
        }
    }
}
