//! Step definitions for task workflow BDD scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
