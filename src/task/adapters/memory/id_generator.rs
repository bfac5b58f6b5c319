//! Task identifier generators.

use crate::task::{
    domain::{TaskDomainError, TaskId},
    ports::TaskIdGenerator,
};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Issues `{prefix}-000001`, `{prefix}-000002`, ... in order.
///
/// Identifiers are unique for the lifetime of the generator; callers
/// restoring a store must resume from the highest issued number.
#[derive(Debug)]
pub struct SequentialTaskIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialTaskIds {
    /// Creates a generator starting at 1.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTaskIdPrefix`] for an unusable
    /// prefix.
    pub fn new(prefix: impl Into<String>) -> Result<Self, TaskDomainError> {
        Self::starting_at(prefix, 1)
    }

    /// Creates a generator whose first identifier uses `first`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTaskIdPrefix`] for an unusable
    /// prefix.
    pub fn starting_at(prefix: impl Into<String>, first: u64) -> Result<Self, TaskDomainError> {
        let raw = prefix.into();
        TaskId::validate_prefix(&raw)?;
        Ok(Self {
            prefix: raw,
            next: AtomicU64::new(first),
        })
    }
}

impl TaskIdGenerator for SequentialTaskIds {
    fn next_id(&self) -> TaskId {
        let number = self.next.fetch_add(1, Ordering::Relaxed);
        TaskId::from_validated_parts(&self.prefix, &format!("{number:06}"))
    }
}

/// Issues `{prefix}-{uuid}` identifiers from random v4 UUIDs.
#[derive(Debug, Clone)]
pub struct RandomTaskIds {
    prefix: String,
}

impl RandomTaskIds {
    /// Creates a generator.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTaskIdPrefix`] for an unusable
    /// prefix.
    pub fn new(prefix: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = prefix.into();
        TaskId::validate_prefix(&raw)?;
        Ok(Self { prefix: raw })
    }
}

impl TaskIdGenerator for RandomTaskIds {
    fn next_id(&self) -> TaskId {
        let suffix = Uuid::new_v4().simple().to_string();
        TaskId::from_validated_parts(&self.prefix, &suffix)
    }
}
