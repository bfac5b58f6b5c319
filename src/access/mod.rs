//! Access model for task visibility and action permissions.
//!
//! Roles carry static capability sets. The [`policy`] functions combine those
//! capabilities with task-specific ownership predicates (region match,
//! assignment membership, authorship) to answer "can this actor see the task"
//! and "which actions may this actor invoke on it right now".
//!
//! - Domain types in [`domain`]
//! - Authorization predicates in [`policy`]

pub mod domain;
pub mod policy;

#[cfg(test)]
mod tests;
