//! In-process adapter implementations.
//!
//! These adapters need no external infrastructure. Persisting tasks
//! durably is left to collaborators implementing
//! [`TaskRepository`](crate::task::ports::TaskRepository).

mod id_generator;
mod task;

pub use id_generator::{RandomTaskIds, SequentialTaskIds};
pub use task::InMemoryTaskRepository;
