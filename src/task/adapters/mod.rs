//! Adapters for the task module ports.
//!
//! - [`memory::InMemoryTaskRepository`]: Thread-safe in-memory task store
//! - [`memory::SequentialTaskIds`]: Monotonic identifier generator
//! - [`memory::RandomTaskIds`]: UUID-backed identifier generator

pub mod memory;
