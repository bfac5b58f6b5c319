//! Shared world state for task workflow BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use zadachnik::access::domain::Actor;
use zadachnik::task::{
    adapters::memory::{InMemoryTaskRepository, SequentialTaskIds},
    domain::Task,
    services::{TaskLifecycleError, TaskLifecycleService},
};

/// Service type used by the BDD world.
pub type TestTaskService =
    TaskLifecycleService<InMemoryTaskRepository, SequentialTaskIds, DefaultClock>;

/// Scenario world for task workflow behaviour tests.
pub struct TaskWorkflowWorld {
    pub service: TestTaskService,
    pub actors: HashMap<String, Actor>,
    pub task: Option<Task>,
    pub last_result: Option<Result<Task, TaskLifecycleError>>,
}

impl TaskWorkflowWorld {
    /// Creates a world with no actors and no task.
    #[must_use]
    pub fn new() -> Self {
        let service = TaskLifecycleService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(SequentialTaskIds::new("T").expect("valid prefix")),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            actors: HashMap::new(),
            task: None,
            last_result: None,
        }
    }

    /// Looks up a registered actor.
    pub fn actor(&self, identifier: &str) -> Result<Actor, eyre::Report> {
        self.actors
            .get(identifier)
            .cloned()
            .ok_or_else(|| eyre::eyre!("actor {identifier} is not registered in the scenario"))
    }

    /// Returns the task under test.
    pub fn task(&self) -> Result<&Task, eyre::Report> {
        self.task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }

    /// Records an action result, keeping the task when it succeeded.
    pub fn record(&mut self, result: Result<Task, TaskLifecycleError>) {
        if let Ok(ref updated) = result {
            self.task = Some(updated.clone());
        }
        self.last_result = Some(result);
    }
}

impl Default for TaskWorkflowWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskWorkflowWorld {
    TaskWorkflowWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
