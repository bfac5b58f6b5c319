//! Identifier issuance port.

use crate::task::domain::TaskId;

/// Issues task identifiers.
///
/// Implementations must never return the same identifier twice; the engine
/// relies on this and does not check.
pub trait TaskIdGenerator: Send + Sync {
    /// Returns a fresh identifier.
    fn next_id(&self) -> TaskId;
}
