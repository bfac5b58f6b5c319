//! Zadachnik: role-driven task lifecycle engine.
//!
//! This crate governs how a task moves through its business states, who may
//! trigger each transition, and how every change is recorded in an
//! append-only audit trail.
//!
//! # Architecture
//!
//! Zadachnik follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory store, id
//!   generators)
//!
//! # Modules
//!
//! - [`access`]: Roles, capabilities, and per-task visibility rules
//! - [`task`]: Task aggregate, transition table, store, and lifecycle service
//! - [`workflow`]: The permission-gated state machine that mutates tasks
//! - [`config`]: Layered engine configuration
//! - [`telemetry`]: Tracing subscriber installation

pub mod access;
pub mod config;
pub mod task;
pub mod telemetry;
pub mod workflow;

#[cfg(test)]
mod test_support;
