//! Service layer tying the workflow engine to a task store.

use crate::access::domain::Actor;
use crate::access::policy::{available_actions, can_view, visible_tasks};
use crate::config::EngineConfig;
use crate::task::{
    adapters::memory::SequentialTaskIds,
    domain::{Task, TaskAction, TaskDomainError, TaskFilter, TaskId},
    ports::{TaskIdGenerator, TaskRepository, TaskRepositoryError},
};
use crate::workflow::{
    RejectionKind, TaskCommand, TaskDraft, WorkflowEngine, WorkflowError, WorkflowSettings,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// The engine rejected the action.
    #[error(transparent)]
    Workflow(#[from] WorkflowError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl TaskLifecycleError {
    /// Returns the rejection kind when the engine rejected the action.
    #[must_use]
    pub const fn rejection_kind(&self) -> Option<RejectionKind> {
        match self {
            Self::Workflow(err) => Some(err.kind()),
            Self::Repository(_) => None,
        }
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Each operation loads the task, runs the pure engine, and replaces the
/// stored value. Callers serialize writers per task.
pub struct TaskLifecycleService<R, G, C>
where
    R: TaskRepository,
    G: TaskIdGenerator,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    ids: Arc<G>,
    engine: WorkflowEngine<C>,
}

impl<R, G, C> Clone for TaskLifecycleService<R, G, C>
where
    R: TaskRepository,
    G: TaskIdGenerator,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            ids: Arc::clone(&self.ids),
            engine: self.engine.clone(),
        }
    }
}

impl<R, C> TaskLifecycleService<R, SequentialTaskIds, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a service with sequential identifiers and settings taken from
    /// the engine configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTaskIdPrefix`] when the configured
    /// prefix is unusable.
    pub fn from_config(
        config: &EngineConfig,
        repository: Arc<R>,
        clock: Arc<C>,
    ) -> Result<Self, TaskDomainError> {
        let ids = SequentialTaskIds::new(config.task_id_prefix.as_str())?;
        Ok(Self::with_settings(
            repository,
            Arc::new(ids),
            clock,
            WorkflowSettings::new(config.default_task_type.as_str()),
        ))
    }
}

impl<R, G, C> TaskLifecycleService<R, G, C>
where
    R: TaskRepository,
    G: TaskIdGenerator,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service with default engine settings.
    #[must_use]
    pub fn new(repository: Arc<R>, ids: Arc<G>, clock: Arc<C>) -> Self {
        Self::with_settings(repository, ids, clock, WorkflowSettings::default())
    }

    /// Creates a new task lifecycle service with explicit engine settings.
    #[must_use]
    pub fn with_settings(
        repository: Arc<R>,
        ids: Arc<G>,
        clock: Arc<C>,
        settings: WorkflowSettings,
    ) -> Self {
        Self {
            repository,
            ids,
            engine: WorkflowEngine::with_settings(clock, settings),
        }
    }

    /// Returns the engine used by the service.
    #[must_use]
    pub const fn engine(&self) -> &WorkflowEngine<C> {
        &self.engine
    }

    /// Creates and stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Workflow`] when the engine rejects the
    /// creation or [`TaskLifecycleError::Repository`] when the store does.
    pub async fn create(&self, actor: &Actor, draft: TaskDraft) -> TaskLifecycleResult<Task> {
        let task = self.engine.create_task(actor, self.ids.next_id(), draft)?;
        self.repository.store(&task).await?;
        debug!(task_id = %task.id(), "task stored");
        Ok(task)
    }

    /// Applies a command to a stored task and stores the result.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::TaskNotFound`] for unknown ids, any engine
    /// rejection, or a repository failure.
    pub async fn apply(
        &self,
        actor: &Actor,
        task_id: &TaskId,
        command: TaskCommand,
    ) -> TaskLifecycleResult<Task> {
        let current = self.load(task_id).await?;
        let updated = self.engine.execute(actor, &current, command)?;
        self.repository.update(&updated).await?;
        debug!(
            task_id = %updated.id(),
            status = %updated.status(),
            history_len = updated.history().len(),
            "task updated"
        );
        Ok(updated)
    }

    /// Returns the task when the actor may see it.
    ///
    /// Tasks hidden from the actor are reported as not found.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::TaskNotFound`] or a repository failure.
    pub async fn find_visible(
        &self,
        actor: &Actor,
        task_id: &TaskId,
    ) -> TaskLifecycleResult<Task> {
        let task = self.load(task_id).await?;
        if !can_view(actor, &task) {
            return Err(WorkflowError::TaskNotFound(task_id.clone()).into());
        }
        Ok(task)
    }

    /// Lists the tasks visible to the actor that pass the filter.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when listing fails.
    pub async fn list_visible(
        &self,
        actor: &Actor,
        filter: &TaskFilter,
    ) -> TaskLifecycleResult<Vec<Task>> {
        let all = self.repository.list().await?;
        Ok(visible_tasks(actor, &all, filter)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Returns the actions the actor may invoke on a visible task.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::TaskNotFound`] when the task is missing or
    /// hidden, or a repository failure.
    pub async fn available_actions(
        &self,
        actor: &Actor,
        task_id: &TaskId,
    ) -> TaskLifecycleResult<Vec<TaskAction>> {
        let task = self.find_visible(actor, task_id).await?;
        Ok(available_actions(actor, &task))
    }

    async fn load(&self, task_id: &TaskId) -> TaskLifecycleResult<Task> {
        self.repository
            .find_by_id(task_id)
            .await?
            .ok_or_else(|| WorkflowError::TaskNotFound(task_id.clone()).into())
    }
}
