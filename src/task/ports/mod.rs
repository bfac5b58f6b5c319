//! Port contracts for task storage and identifier issuance.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod id_generator;
pub mod repository;

pub use id_generator::TaskIdGenerator;
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};

#[cfg(test)]
pub use repository::MockTaskRepository;
