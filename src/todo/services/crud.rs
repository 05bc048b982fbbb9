//! Service layer exposing todo use-cases to boundary adapters.

use crate::todo::{
    domain::{NewTodo, Todo, TodoDomainError, TodoId, TodoTitle},
    ports::{TodoRepository, TodoRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for todo operations.
#[derive(Debug, Error)]
pub enum TodoServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TodoDomainError),
    /// The requested todo does not exist.
    #[error("todo not found: {0}")]
    NotFound(TodoId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TodoRepositoryError),
}

/// Result type for todo service operations.
pub type TodoServiceResult<T> = Result<T, TodoServiceError>;

/// Todo use-case orchestration service.
///
/// The single seam between boundary adapters and storage. Every operation
/// surfaces failures to the caller unchanged; there is no internal retry or
/// recovery.
#[derive(Clone)]
pub struct TodoService<R, C>
where
    R: TodoRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TodoService<R, C>
where
    R: TodoRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new todo service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a todo with the given title and persists it.
    ///
    /// The persisted entity is returned carrying its assigned identifier,
    /// an unset completion flag, and a clock-stamped creation time.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Domain`] when the title is empty after
    /// trimming, or [`TodoServiceError::Repository`] when persistence fails.
    pub async fn create_todo(&self, title: impl Into<String>) -> TodoServiceResult<Todo> {
        let validated = TodoTitle::new(title)?;
        let draft = NewTodo::new(validated, &*self.clock);
        Ok(self.repository.insert(draft).await?)
    }

    /// Retrieves a todo by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::NotFound`] when no record exists for the
    /// identifier.
    pub async fn get_todo(&self, id: TodoId) -> TodoServiceResult<Todo> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TodoServiceError::NotFound(id))
    }

    /// Sets the completion flag on an existing todo and re-saves it.
    ///
    /// The identifier, title, and creation timestamp are preserved; the
    /// entity carries no modification timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::NotFound`] when no record exists for the
    /// identifier.
    pub async fn update_todo(&self, id: TodoId, completed: bool) -> TodoServiceResult<Todo> {
        let mut todo = self.get_todo(id).await?;
        todo.set_completed(completed);
        self.repository.update(&todo).await?;
        Ok(todo)
    }

    /// Deletes a todo by identifier.
    ///
    /// Loads the record first and deletes by the loaded record's own
    /// identifier, guarding against lookup-key and record-key divergence.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::NotFound`] when no record exists for the
    /// identifier.
    pub async fn delete_todo(&self, id: TodoId) -> TodoServiceResult<()> {
        let todo = self.get_todo(id).await?;
        Ok(self.repository.delete(todo.id()).await?)
    }

    /// Returns every stored todo, unchanged from the store's output.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Repository`] when the store read fails.
    pub async fn list_todos(&self) -> TodoServiceResult<Vec<Todo>> {
        Ok(self.repository.find_all().await?)
    }
}
