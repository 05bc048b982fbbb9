//! Unit tests for the todo module.
//!
//! Tests are organised by layer, covering happy paths, error cases, and
//! edge cases for all public APIs.

mod domain_tests;
mod service_tests;
