//! Request payloads accepted by the todo endpoints.

use serde::Deserialize;

/// Body of `POST /api/v1/todos`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodoRequest {
    /// Title for the new todo.
    pub title: String,
}

/// Body of `PUT /api/v1/todos/{id}`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct UpdateTodoRequest {
    /// Completion flag to store on the todo.
    pub completed: bool,
}
