//! Todo entity and its pre-persistence form.

use super::{TodoId, TodoTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A todo record that has not been persisted yet.
///
/// Carries no identifier; the store assigns one when the record is first
/// inserted, converting it into a [`Todo`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    title: TodoTitle,
    completed: bool,
    created_at: DateTime<Utc>,
}

impl NewTodo {
    /// Creates an incomplete todo stamped with the current clock time.
    #[must_use]
    pub fn new(title: TodoTitle, clock: &impl Clock) -> Self {
        Self {
            title,
            completed: false,
            created_at: clock.utc(),
        }
    }

    /// Returns the todo title.
    #[must_use]
    pub const fn title(&self) -> &TodoTitle {
        &self.title
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Converts this record into a persisted [`Todo`] with the given
    /// store-assigned identifier.
    #[must_use]
    pub fn into_todo(self, id: TodoId) -> Todo {
        Todo {
            id,
            title: self.title,
            completed: self.completed,
            created_at: self.created_at,
        }
    }
}

/// A persisted todo record.
///
/// The identifier is immutable once assigned; the creation timestamp is
/// never modified. Only the completion flag changes over the record's life.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    id: TodoId,
    title: TodoTitle,
    completed: bool,
    created_at: DateTime<Utc>,
}

impl Todo {
    /// Returns the todo identifier.
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Returns the todo title.
    #[must_use]
    pub const fn title(&self) -> &TodoTitle {
        &self.title
    }

    /// Returns whether the todo has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Sets the completion flag.
    ///
    /// The entity carries no modification timestamp, so nothing else
    /// changes.
    pub const fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}
