//! HTTP entry point for the taskboard todo API.
//!
//! Wires the in-memory todo store into the use-case service, mounts the
//! API routes, and serves them on the configured bind address.

use mockable::DefaultClock;
use std::net::SocketAddr;
use std::sync::Arc;
use taskboard::api;
use taskboard::config::Settings;
use taskboard::todo::{adapters::memory::InMemoryTodoRepository, services::TodoService};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::new()?;

    let repository = Arc::new(InMemoryTodoRepository::new());
    let service = Arc::new(TodoService::new(repository, Arc::new(DefaultClock)));
    let app = api::routes().with_state(service);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    info!("todo API listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
