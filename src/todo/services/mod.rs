//! Application services for todo use-cases.

mod crud;

pub use crud::{TodoService, TodoServiceError, TodoServiceResult};
