//! Error types for access domain validation and parsing.

use super::Role;
use thiserror::Error;

/// Errors returned while constructing actor identity values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccessDomainError {
    /// The actor identifier is empty after trimming.
    #[error("actor identifier must not be empty")]
    EmptyActorId,

    /// The region name is empty after trimming.
    #[error("region must not be empty")]
    EmptyRegion,

    /// The role is scoped to a region but none was supplied.
    #[error("role '{0}' requires a region")]
    MissingRegion(Role),

    /// The role is global and must not carry a region.
    #[error("role '{0}' must not carry a region")]
    UnexpectedRegion(Role),

    /// Only employees may operate under an acting identifier.
    #[error("role '{0}' cannot act under an alternate identifier")]
    ActingAsNotAllowed(Role),
}

/// Error returned while parsing a role name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

/// Error returned while parsing a capability name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown capability: {0}")]
pub struct ParseCapabilityError(pub String);
