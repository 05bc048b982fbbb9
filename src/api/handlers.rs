//! Handler implementations for the todo endpoints.

use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::api::SharedTodoService;
use crate::api::types::{CreateTodoRequest, UpdateTodoRequest};
use crate::todo::{
    domain::{Todo, TodoId},
    ports::TodoRepositoryError,
    services::TodoServiceError,
};

/// API errors for todo operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Service-level todo error.
    #[error(transparent)]
    Service(#[from] TodoServiceError),
    /// The path identifier is not a positive integer.
    #[error("invalid todo id: {0}")]
    InvalidId(u64),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Service(TodoServiceError::Domain(_)) | Self::InvalidId(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Service(
                TodoServiceError::NotFound(_)
                | TodoServiceError::Repository(TodoRepositoryError::NotFound(_)),
            ) => StatusCode::NOT_FOUND,
            Self::Service(TodoServiceError::Repository(TodoRepositoryError::Persistence(_))) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

/// Parses a path identifier, rejecting the zero sentinel.
fn parse_todo_id(raw: u64) -> Result<TodoId, ApiError> {
    TodoId::new(raw).map_err(|_| ApiError::InvalidId(raw))
}

/// POST /api/v1/todos
///
/// Create a todo from a title.
pub async fn create_todo(
    State(service): State<SharedTodoService>,
    Json(req): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let todo = service.create_todo(req.title).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// GET /api/v1/todos
///
/// List every stored todo.
pub async fn list_todos(
    State(service): State<SharedTodoService>,
) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = service.list_todos().await?;
    Ok(Json(todos))
}

/// GET /api/v1/todos/{id}
///
/// Fetch a single todo by identifier.
pub async fn get_todo(
    State(service): State<SharedTodoService>,
    Path(id): Path<u64>,
) -> Result<Json<Todo>, ApiError> {
    let todo = service.get_todo(parse_todo_id(id)?).await?;
    Ok(Json(todo))
}

/// PUT /api/v1/todos/{id}
///
/// Set the completion flag on a todo.
pub async fn update_todo(
    State(service): State<SharedTodoService>,
    Path(id): Path<u64>,
    Json(req): Json<UpdateTodoRequest>,
) -> Result<Json<Todo>, ApiError> {
    let todo = service
        .update_todo(parse_todo_id(id)?, req.completed)
        .await?;
    Ok(Json(todo))
}

/// DELETE /api/v1/todos/{id}
///
/// Remove a todo by identifier.
pub async fn delete_todo(
    State(service): State<SharedTodoService>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    service.delete_todo(parse_todo_id(id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
