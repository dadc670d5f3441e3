//! Tool gateway
//!
//! Wraps the store service's HTTP API as three tools (add, list, overdue)
//! and serves them to a tool-calling host over stdio JSON-RPC.

pub mod client;
pub mod overdue;
pub mod registry;
pub mod rpc;
pub mod runtime;
pub mod tools;
pub mod types;

pub use client::{StoreClient, TodoApi, DEFAULT_BASE_URL};
pub use overdue::OverduePolicy;
pub use registry::ToolRegistry;
pub use rpc::RpcServer;
pub use runtime::ToolRuntime;
pub use tools::{AddTodoOutcome, TodoTools};
pub use types::{ToolResult, ToolSchema};
