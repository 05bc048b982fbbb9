//! Taskboard: a minimal task-tracking service.
//!
//! This crate provides an HTTP CRUD API for todo records backed by an
//! in-memory store.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory store, HTTP)
//!
//! # Modules
//!
//! - [`todo`]: Todo records, storage, and use-case services
//! - [`api`]: HTTP boundary consuming the service contract
//! - [`config`]: Server settings

pub mod api;
pub mod config;
pub mod todo;
