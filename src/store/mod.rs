//! Store service
//!
//! Owns the todo collection and exposes list/add over HTTP.

pub mod memory;
pub mod server;
pub mod types;

pub use memory::TodoStore;
pub use server::{router, serve};
pub use types::{Envelope, NewTodo, TodoItem, DEFAULT_LIST_LENGTH, SUCCESS_CODE};
