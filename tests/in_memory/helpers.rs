//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use zadachnik::access::domain::{Actor, ActorId};
use zadachnik::task::{
    adapters::memory::{InMemoryTaskRepository, SequentialTaskIds},
    services::TaskLifecycleService,
};

/// Service type used by the in-memory integration tests.
pub type TestService =
    TaskLifecycleService<InMemoryTaskRepository, SequentialTaskIds, DefaultClock>;

/// Provides a fresh service over an empty store.
#[fixture]
pub fn service() -> TestService {
    TaskLifecycleService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(SequentialTaskIds::new("T").expect("valid prefix")),
        Arc::new(DefaultClock),
    )
}

/// Business user in the northern region.
pub fn client() -> Actor {
    Actor::business("client@bank.example", "North").expect("valid business actor")
}

/// Manager of the northern region.
pub fn north_manager() -> Actor {
    Actor::manager("lead@north.example", "North").expect("valid manager actor")
}

/// Manager of the southern region.
pub fn south_manager() -> Actor {
    Actor::manager("lead@south.example", "South").expect("valid manager actor")
}

/// Employee who receives assignments.
pub fn analyst() -> Actor {
    Actor::employee("analyst@bank.example").expect("valid employee actor")
}

/// Employee who is never assigned.
pub fn bystander() -> Actor {
    Actor::employee("bystander@bank.example").expect("valid employee actor")
}

/// Global administrator.
pub fn root() -> Actor {
    Actor::superuser("root@bank.example").expect("valid superuser actor")
}

/// Identifier of [`analyst`].
pub fn analyst_id() -> ActorId {
    analyst().identifier().clone()
}
