//! todokit
//!
//! A todo list kept in memory and exposed two ways:
//!
//! - **store**: an HTTP CRUD service (`GET /todo/list`, `POST /todo/add`)
//!   answering in a `{code, data, msg}` envelope
//! - **gateway**: tool wrappers (`add_todo`, `get_todo_list`,
//!   `get_overdue_todos`) that call the store over HTTP and are served to
//!   a tool-calling host via stdio JSON-RPC

pub mod errors;
pub mod store;
pub mod gateway;

// Re-export commonly used types
pub use errors::{Result, TodoError};
pub use store::{TodoItem, TodoStore};

// Binary support
pub mod cli;
pub mod config;
pub mod logging;
