//! HTTP surface of the store service
//!
//! Routes:
//! - GET  /todo/list?length=N
//! - POST /todo/add
//! - GET  /health

use crate::errors::Result;
use crate::store::memory::TodoStore;
use crate::store::types::{Envelope, ListQuery, NewTodo, TodoItem};
use axum::{
    extract::{Query, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::future::Future;
use tokio::net::TcpListener;
use tracing::{debug, info};

/// Default bind host
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port
pub const DEFAULT_PORT: u16 = 8001;

/// Health payload
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub count: usize,
}

/// Build the router over a store handle
pub fn router(store: TodoStore) -> Router {
    Router::new()
        .route("/todo/list", get(list_todos))
        .route("/todo/add", post(add_todo))
        .route("/health", get(health))
        .with_state(store)
}

/// Serve on an already-bound listener until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, store: TodoStore, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!(%addr, "store service listening");

    axum::serve(listener, router(store))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("store service stopped");
    Ok(())
}

/// GET /todo/list
async fn list_todos(
    State(store): State<TodoStore>,
    Query(query): Query<ListQuery>,
) -> Json<Envelope<Vec<TodoItem>>> {
    let items = store.list(query.length);
    debug!(length = query.length, returned = items.len(), "list todos");
    Json(Envelope::success(items))
}

/// POST /todo/add
async fn add_todo(
    State(store): State<TodoStore>,
    Json(req): Json<NewTodo>,
) -> Json<Envelope<TodoItem>> {
    let item = store.add(req.name, req.priority);
    info!(id = %item.id, name = %item.name, priority = %item.priority, "todo added");
    Json(Envelope::success(item))
}

/// GET /health
async fn health(State(store): State<TodoStore>) -> Json<Envelope<HealthStatus>> {
    Json(Envelope::success(HealthStatus {
        status: "ok",
        count: store.len(),
    }))
}
