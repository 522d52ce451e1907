use async_trait::async_trait;
use derive_new::new;
use garde::Validate;

use crate::{
    data::{
        projects::{Project, ProjectId},
        users::UserId,
        workspaces::WorkspaceId,
    },
    services::ServiceError,
};

#[async_trait]
pub trait ProjectService: Send + Sync + 'static {
    async fn list(
        &self,
        user_id: &UserId,
        workspace_id: &WorkspaceId,
    ) -> Result<Vec<Project>, ServiceError>;

    async fn create(
        &self,
        user_id: &UserId,
        input: CreateProject,
    ) -> Result<Project, ServiceError>;

    async fn get(
        &self,
        user_id: &UserId,
        project_id: &ProjectId,
    ) -> Result<Project, ServiceError>;

    async fn update(
        &self,
        user_id: &UserId,
        project_id: &ProjectId,
        input: UpdateProject,
    ) -> Result<Project, ServiceError>;

    /// Deletes the project and its tasks.
    async fn delete(
        &self,
        user_id: &UserId,
        project_id: &ProjectId,
    ) -> Result<ProjectId, ServiceError>;
}

pub type DynProjectService = Box<dyn ProjectService>;

#[derive(Debug, Clone, PartialEq, Eq, Validate, new)]
pub struct CreateProject {
    #[garde(skip)]
    pub workspace_id: WorkspaceId,

    #[garde(length(min = 1, max = 256))]
    #[new(into)]
    pub name: String,

    #[garde(skip)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct UpdateProject {
    #[garde(length(min = 1, max = 256))]
    pub name: Option<String>,

    #[garde(skip)]
    pub image: Option<Option<String>>,
}
