//! The identity invoking an engine action.

use super::{AccessDomainError, ActorId, Capability, Region, Role};
use serde::{Deserialize, Serialize};

/// Actor record as supplied by a user directory.
///
/// Records are unvalidated; convert them with [`Actor::try_from`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorRecord {
    /// Login identifier.
    pub identifier: String,
    /// Display name recorded in task history.
    #[serde(default)]
    pub name: Option<String>,
    /// Role of the actor.
    pub role: Role,
    /// Region the actor belongs to.
    #[serde(default)]
    pub region: Option<String>,
    /// Alternate identifier an employee is currently acting as.
    #[serde(default)]
    pub acting_as: Option<String>,
}

/// Validated caller identity for one engine invocation.
///
/// Permissions are never stored on the actor: they are derived from
/// [`Role::permissions`] on every lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ActorRecord")]
pub struct Actor {
    identifier: ActorId,
    name: String,
    role: Role,
    region: Option<Region>,
    acting_as: Option<ActorId>,
}

impl Actor {
    /// Creates a validated actor.
    ///
    /// # Errors
    ///
    /// Returns [`AccessDomainError::MissingRegion`] when a business or
    /// manager actor has no region, or
    /// [`AccessDomainError::UnexpectedRegion`] when a superuser carries one.
    pub fn new(
        identifier: ActorId,
        role: Role,
        region: Option<Region>,
    ) -> Result<Self, AccessDomainError> {
        if role.requires_region() && region.is_none() {
            return Err(AccessDomainError::MissingRegion(role));
        }
        if role == Role::Superuser && region.is_some() {
            return Err(AccessDomainError::UnexpectedRegion(role));
        }

        Ok(Self {
            name: identifier.as_str().to_owned(),
            identifier,
            role,
            region,
            acting_as: None,
        })
    }

    /// Creates a business actor in the given region.
    ///
    /// # Errors
    ///
    /// Returns [`AccessDomainError`] when the identifier or region is blank.
    pub fn business(
        identifier: impl Into<String>,
        region: impl Into<String>,
    ) -> Result<Self, AccessDomainError> {
        Self::new(
            ActorId::new(identifier)?,
            Role::Business,
            Some(Region::new(region)?),
        )
    }

    /// Creates a manager actor in the given region.
    ///
    /// # Errors
    ///
    /// Returns [`AccessDomainError`] when the identifier or region is blank.
    pub fn manager(
        identifier: impl Into<String>,
        region: impl Into<String>,
    ) -> Result<Self, AccessDomainError> {
        Self::new(
            ActorId::new(identifier)?,
            Role::Manager,
            Some(Region::new(region)?),
        )
    }

    /// Creates an employee actor without a home region.
    ///
    /// # Errors
    ///
    /// Returns [`AccessDomainError::EmptyActorId`] when the identifier is
    /// blank.
    pub fn employee(identifier: impl Into<String>) -> Result<Self, AccessDomainError> {
        Self::new(ActorId::new(identifier)?, Role::Employee, None)
    }

    /// Creates a superuser actor.
    ///
    /// # Errors
    ///
    /// Returns [`AccessDomainError::EmptyActorId`] when the identifier is
    /// blank.
    pub fn superuser(identifier: impl Into<String>) -> Result<Self, AccessDomainError> {
        Self::new(ActorId::new(identifier)?, Role::Superuser, None)
    }

    /// Sets the display name. Blank names keep the identifier.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let raw = name.into();
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            trimmed.clone_into(&mut self.name);
        }
        self
    }

    /// Makes an employee operate under an alternate identifier.
    ///
    /// The acting identifier replaces the login identifier in every
    /// assignment membership check.
    ///
    /// # Errors
    ///
    /// Returns [`AccessDomainError::ActingAsNotAllowed`] for non-employees.
    pub fn acting_as(mut self, identifier: ActorId) -> Result<Self, AccessDomainError> {
        if self.role != Role::Employee {
            return Err(AccessDomainError::ActingAsNotAllowed(self.role));
        }
        self.acting_as = Some(identifier);
        Ok(self)
    }

    /// Returns the login identifier.
    #[must_use]
    pub const fn identifier(&self) -> &ActorId {
        &self.identifier
    }

    /// Returns the identifier used for assignment checks.
    #[must_use]
    pub fn effective_id(&self) -> &ActorId {
        self.acting_as.as_ref().unwrap_or(&self.identifier)
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the region, if any.
    #[must_use]
    pub const fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    /// Returns the acting identifier, if any.
    #[must_use]
    pub const fn acting_as_id(&self) -> Option<&ActorId> {
        self.acting_as.as_ref()
    }

    /// Returns whether the actor's role holds the capability.
    #[must_use]
    pub fn can(&self, capability: Capability) -> bool {
        self.role.has(capability)
    }
}

impl TryFrom<ActorRecord> for Actor {
    type Error = AccessDomainError;

    fn try_from(record: ActorRecord) -> Result<Self, Self::Error> {
        let region = record.region.map(Region::new).transpose()?;
        let mut actor = Self::new(ActorId::new(record.identifier)?, record.role, region)?;
        if let Some(name) = record.name {
            actor = actor.with_name(name);
        }
        match record.acting_as {
            Some(acting) => actor.acting_as(ActorId::new(acting)?),
            None => Ok(actor),
        }
    }
}
