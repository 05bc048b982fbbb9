//! Thread-safe in-memory todo repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::todo::{
    domain::{NewTodo, Todo, TodoId},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};

/// Process-lifetime todo store backed by a lock-guarded map.
///
/// All mutating operations take the exclusive lock; reads take the shared
/// lock. The identifier counter lives behind the same lock as the map, so
/// id assignment and insertion are a single critical section.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    state: Arc<RwLock<InMemoryTodoState>>,
}

#[derive(Debug)]
struct InMemoryTodoState {
    todos: HashMap<TodoId, Todo>,
    next_id: TodoId,
}

impl Default for InMemoryTodoState {
    fn default() -> Self {
        Self {
            todos: HashMap::new(),
            next_id: TodoId::FIRST,
        }
    }
}

impl InMemoryTodoRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn insert(&self, todo: NewTodo) -> TodoRepositoryResult<Todo> {
        let mut state = self.state.write().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let id = state.next_id;
        state.next_id = id.next();

        let persisted = todo.into_todo(id);
        state.todos.insert(id, persisted.clone());
        Ok(persisted)
    }

    async fn update(&self, todo: &Todo) -> TodoRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        state.todos.insert(todo.id(), todo.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>> {
        let state = self.state.read().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.todos.get(&id).cloned())
    }

    async fn find_all(&self) -> TodoRepositoryResult<Vec<Todo>> {
        let state = self.state.read().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.todos.values().cloned().collect())
    }

    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        state
            .todos
            .remove(&id)
            .map(|_| ())
            .ok_or(TodoRepositoryError::NotFound(id))
    }
}
