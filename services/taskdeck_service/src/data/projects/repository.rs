use async_trait::async_trait;
use strum::{EnumDiscriminants, IntoDiscriminant};
use time::OffsetDateTime;

use crate::data::{
    projects::{Project, ProjectChanges, ProjectId},
    workspaces::WorkspaceId,
};

#[async_trait]
pub trait ProjectRepository: Send + Sync + 'static {
    async fn get(
        &self,
        id: &ProjectId,
    ) -> Result<Option<Project>, ProjectRepositoryError>;

    /// Returns the workspace's projects, newest first.
    async fn list_by_workspace(
        &self,
        workspace_id: &WorkspaceId,
    ) -> Result<Vec<Project>, ProjectRepositoryError>;

    async fn create(
        &self,
        project: Project,
    ) -> Result<Project, ProjectRepositoryError>;

    async fn update(
        &self,
        id: &ProjectId,
        changes: ProjectChanges,
        now: OffsetDateTime,
    ) -> Result<Option<Project>, ProjectRepositoryError>;

    async fn delete(
        &self,
        id: &ProjectId,
    ) -> Result<bool, ProjectRepositoryError>;

    async fn delete_by_workspace(
        &self,
        workspace_id: &WorkspaceId,
    ) -> Result<u64, ProjectRepositoryError>;
}

pub type DynProjectRepository = Box<dyn ProjectRepository>;

#[derive(Debug, thiserror::Error)]
#[error("project repository error: {inner}")]
pub struct ProjectRepositoryError {
    inner: ProjectRepositoryErrorInner,
    kind: ProjectRepositoryErrorKind,
}

impl ProjectRepositoryError {
    #[allow(unused)]
    pub fn kind(&self) -> ProjectRepositoryErrorKind {
        self.kind
    }
}

impl<T: Into<ProjectRepositoryErrorInner>> From<T> for ProjectRepositoryError {
    fn from(inner: T) -> Self {
        let inner = inner.into();
        Self {
            kind: inner.discriminant(),
            inner,
        }
    }
}

#[derive(Debug, EnumDiscriminants, thiserror::Error)]
#[strum_discriminants(vis(pub), name(ProjectRepositoryErrorKind))]
pub enum ProjectRepositoryErrorInner {
    #[error(transparent)]
    Custom(#[from] eyre::Report),

    #[error("project already exists with id '{0}'")]
    AlreadyExists(ProjectId),
}
