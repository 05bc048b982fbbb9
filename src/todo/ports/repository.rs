//! Repository port for todo persistence and lookup.

use crate::todo::domain::{NewTodo, Todo, TodoId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for todo repository operations.
pub type TodoRepositoryResult<T> = Result<T, TodoRepositoryError>;

/// Todo persistence contract.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Stores a new record, assigning it the next sequential identifier.
    ///
    /// Returns the persisted entity carrying its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Persistence`] when the backing store
    /// fails.
    async fn insert(&self, todo: NewTodo) -> TodoRepositoryResult<Todo>;

    /// Overwrites the record at the todo's identifier.
    ///
    /// Upsert semantics: no existence check is performed.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Persistence`] when the backing store
    /// fails.
    async fn update(&self, todo: &Todo) -> TodoRepositoryResult<()>;

    /// Finds a record by identifier.
    ///
    /// Returns `None` when the record does not exist.
    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>>;

    /// Returns every stored record.
    ///
    /// Order is unspecified and must not be assumed stable across calls.
    async fn find_all(&self) -> TodoRepositoryResult<Vec<Todo>>;

    /// Removes the record at the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::NotFound`] when the record does not
    /// exist.
    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<()>;
}

/// Errors returned by todo repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoRepositoryError {
    /// The todo was not found.
    #[error("todo not found: {0}")]
    NotFound(TodoId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
