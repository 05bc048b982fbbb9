//! Adapter implementations of the todo storage port.

pub mod memory;
