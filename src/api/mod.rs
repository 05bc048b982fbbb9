//! HTTP boundary for the todo service.
//!
//! Translates requests into service operations and service results into
//! responses. The boundary consumes only the service's public contract;
//! entities serialize directly as response bodies.

pub mod handlers;
pub mod routes;
pub mod types;


pub use handlers::ApiError;
pub use routes::routes;

use crate::todo::{adapters::memory::InMemoryTodoRepository, services::TodoService};
use mockable::DefaultClock;
use std::sync::Arc;

/// Shared service handle installed as router state.
pub type SharedTodoService = Arc<TodoService<InMemoryTodoRepository, DefaultClock>>;
