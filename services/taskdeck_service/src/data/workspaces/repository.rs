use async_trait::async_trait;
use strum::{EnumDiscriminants, IntoDiscriminant};
use time::OffsetDateTime;

use crate::data::workspaces::{Workspace, WorkspaceChanges, WorkspaceId};

#[async_trait]
pub trait WorkspaceRepository: Send + Sync + 'static {
    async fn get(
        &self,
        id: &WorkspaceId,
    ) -> Result<Option<Workspace>, WorkspaceRepositoryError>;

    /// Returns the matching workspaces, newest first.
    async fn list_by_ids(
        &self,
        ids: &[WorkspaceId],
    ) -> Result<Vec<Workspace>, WorkspaceRepositoryError>;

    async fn create(
        &self,
        workspace: Workspace,
    ) -> Result<Workspace, WorkspaceRepositoryError>;

    async fn update(
        &self,
        id: &WorkspaceId,
        changes: WorkspaceChanges,
        now: OffsetDateTime,
    ) -> Result<Option<Workspace>, WorkspaceRepositoryError>;

    async fn delete(
        &self,
        id: &WorkspaceId,
    ) -> Result<bool, WorkspaceRepositoryError>;
}

pub type DynWorkspaceRepository = Box<dyn WorkspaceRepository>;

#[derive(Debug, thiserror::Error)]
#[error("workspace repository error: {inner}")]
pub struct WorkspaceRepositoryError {
    inner: WorkspaceRepositoryErrorInner,
    kind: WorkspaceRepositoryErrorKind,
}

impl WorkspaceRepositoryError {
    #[allow(unused)]
    pub fn kind(&self) -> WorkspaceRepositoryErrorKind {
        self.kind
    }
}

impl<T: Into<WorkspaceRepositoryErrorInner>> From<T>
    for WorkspaceRepositoryError
{
    fn from(inner: T) -> Self {
        let inner = inner.into();
        Self {
            kind: inner.discriminant(),
            inner,
        }
    }
}

#[derive(Debug, EnumDiscriminants, thiserror::Error)]
#[strum_discriminants(vis(pub), name(WorkspaceRepositoryErrorKind))]
pub enum WorkspaceRepositoryErrorInner {
    #[error(transparent)]
    Custom(#[from] eyre::Report),

    #[error("workspace already exists with id '{0}'")]
    AlreadyExists(WorkspaceId),
}
