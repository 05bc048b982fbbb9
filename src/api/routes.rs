//! Route table for the todo HTTP API.

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::SharedTodoService;
use crate::api::handlers::{create_todo, delete_todo, get_todo, list_todos, update_todo};

/// API routes for todo management.
///
/// Creates a router with all todo endpoints mounted at `/api/v1`, plus a
/// liveness probe.
pub fn routes() -> Router<SharedTodoService> {
    Router::new()
        .route("/api/v1/todos", post(create_todo).get(list_todos))
        .route(
            "/api/v1/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .route("/health/live", get(|| std::future::ready("OK")))
}
