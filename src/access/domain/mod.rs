//! Identity and permission values for the access model.

mod actor;
mod capability;
mod error;
mod ids;
mod role;

pub use actor::{Actor, ActorRecord};
pub use capability::Capability;
pub use error::{AccessDomainError, ParseCapabilityError, ParseRoleError};
pub use ids::{ActorId, Region};
pub use role::Role;
