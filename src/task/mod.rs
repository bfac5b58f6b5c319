//! Task aggregate, task store, and lifecycle orchestration.
//!
//! The domain state machine lives in [`domain`]; the pure engine that drives
//! it lives in [`crate::workflow`]. This module adds the store abstraction
//! that decouples the engine from the mutable task collection:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
