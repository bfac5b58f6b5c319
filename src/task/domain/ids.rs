//! Identifier type for task aggregates.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique task identifier in `{prefix}-{suffix}` form.
///
/// Uniqueness is guaranteed by the generator that issues identifiers, not by
/// this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskId(String);

impl TaskId {
    /// Creates a validated task identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTaskId`] when the value is blank or
    /// contains whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        if raw.is_empty() || raw.chars().any(char::is_whitespace) {
            return Err(TaskDomainError::InvalidTaskId(raw));
        }
        Ok(Self(raw))
    }

    /// Creates an identifier from a prefix and a generated suffix.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTaskIdPrefix`] when the prefix is
    /// not ASCII alphanumeric, or [`TaskDomainError::InvalidTaskId`] when the
    /// suffix is unusable.
    pub fn from_parts(prefix: &str, suffix: &str) -> Result<Self, TaskDomainError> {
        Self::validate_prefix(prefix)?;
        if suffix.is_empty() {
            return Err(TaskDomainError::InvalidTaskId(format!("{prefix}-")));
        }
        Self::new(format!("{prefix}-{suffix}"))
    }

    /// Joins parts already known to be valid.
    pub(crate) fn from_validated_parts(prefix: &str, suffix: &str) -> Self {
        Self(format!("{prefix}-{suffix}"))
    }

    /// Checks that a prefix is usable in generated identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTaskIdPrefix`] when the prefix is
    /// empty or contains characters other than ASCII letters and digits.
    pub fn validate_prefix(prefix: &str) -> Result<(), TaskDomainError> {
        if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(TaskDomainError::InvalidTaskIdPrefix(prefix.to_owned()));
        }
        Ok(())
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskId {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskId> for String {
    fn from(value: TaskId) -> Self {
        value.0
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
