use async_trait::async_trait;
use strum::{EnumDiscriminants, IntoDiscriminant};
use time::OffsetDateTime;

use crate::data::{
    tasks::{Task, TaskChanges, TaskId, TaskQuery, TaskStatus},
    workspaces::WorkspaceId,
};

#[async_trait]
pub trait TaskRepository: Send + Sync + 'static {
    async fn get(
        &self,
        id: &TaskId,
    ) -> Result<Option<Task>, TaskRepositoryError>;

    async fn get_many(
        &self,
        ids: &[TaskId],
    ) -> Result<Vec<Task>, TaskRepositoryError>;

    /// Returns the matching tasks, newest first.
    async fn list(
        &self,
        query: &TaskQuery,
    ) -> Result<Vec<Task>, TaskRepositoryError>;

    async fn count(
        &self,
        query: &TaskQuery,
    ) -> Result<u64, TaskRepositoryError>;

    async fn highest_position(
        &self,
        workspace_id: &WorkspaceId,
        status: TaskStatus,
    ) -> Result<Option<u32>, TaskRepositoryError>;

    async fn create(&self, task: Task) -> Result<Task, TaskRepositoryError>;

    async fn update(
        &self,
        id: &TaskId,
        changes: TaskChanges,
        now: OffsetDateTime,
    ) -> Result<Option<Task>, TaskRepositoryError>;

    /// Applies every change or none of them.
    async fn update_many(
        &self,
        changes: Vec<(TaskId, TaskChanges)>,
        now: OffsetDateTime,
    ) -> Result<Vec<Task>, TaskRepositoryError>;

    async fn delete(&self, id: &TaskId) -> Result<bool, TaskRepositoryError>;

    async fn delete_matching(
        &self,
        query: &TaskQuery,
    ) -> Result<u64, TaskRepositoryError>;
}

pub type DynTaskRepository = Box<dyn TaskRepository>;

#[derive(Debug, thiserror::Error)]
#[error("task repository error: {inner}")]
pub struct TaskRepositoryError {
    inner: TaskRepositoryErrorInner,
    kind: TaskRepositoryErrorKind,
}

impl TaskRepositoryError {
    #[allow(unused)]
    pub fn kind(&self) -> TaskRepositoryErrorKind {
        self.kind
    }
}

impl<T: Into<TaskRepositoryErrorInner>> From<T> for TaskRepositoryError {
    fn from(inner: T) -> Self {
        let inner = inner.into();
        Self {
            kind: inner.discriminant(),
            inner,
        }
    }
}

#[derive(Debug, EnumDiscriminants, thiserror::Error)]
#[strum_discriminants(vis(pub), name(TaskRepositoryErrorKind))]
pub enum TaskRepositoryErrorInner {
    #[error(transparent)]
    Custom(#[from] eyre::Report),

    #[error("task already exists with id '{0}'")]
    AlreadyExists(TaskId),

    #[error("task does not exist with id '{0}'")]
    DoesNotExist(TaskId),
}
