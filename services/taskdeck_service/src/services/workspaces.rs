use async_trait::async_trait;
use derive_new::new;
use garde::Validate;

use crate::{
    data::{
        users::UserId,
        workspaces::{Workspace, WorkspaceId, WorkspaceInfo},
    },
    services::ServiceError,
};

#[async_trait]
pub trait WorkspaceService: Send + Sync + 'static {
    /// Workspaces the user is a member of, newest first.
    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Workspace>, ServiceError>;

    /// Creates the workspace and makes the creator its admin. The workspace
    /// is removed again if the admin membership cannot be recorded.
    async fn create(
        &self,
        user_id: &UserId,
        input: CreateWorkspace,
    ) -> Result<Workspace, ServiceError>;

    async fn get(
        &self,
        user_id: &UserId,
        workspace_id: &WorkspaceId,
    ) -> Result<Workspace, ServiceError>;

    async fn update(
        &self,
        user_id: &UserId,
        workspace_id: &WorkspaceId,
        input: UpdateWorkspace,
    ) -> Result<Workspace, ServiceError>;

    /// Deletes the workspace together with its projects, tasks and members.
    async fn delete(
        &self,
        user_id: &UserId,
        workspace_id: &WorkspaceId,
    ) -> Result<WorkspaceId, ServiceError>;

    /// Public summary used by the join page; requires no membership.
    async fn info(
        &self,
        workspace_id: &WorkspaceId,
    ) -> Result<WorkspaceInfo, ServiceError>;

    async fn reset_invite_code(
        &self,
        user_id: &UserId,
        workspace_id: &WorkspaceId,
    ) -> Result<Workspace, ServiceError>;

    /// Adds the user as a plain member when `code` matches the current
    /// invite code.
    async fn join(
        &self,
        user_id: &UserId,
        workspace_id: &WorkspaceId,
        code: &str,
    ) -> Result<Workspace, ServiceError>;
}

pub type DynWorkspaceService = Box<dyn WorkspaceService>;

#[derive(Debug, Clone, PartialEq, Eq, Validate, new)]
pub struct CreateWorkspace {
    #[garde(length(min = 1, max = 256))]
    #[new(into)]
    pub name: String,

    #[garde(skip)]
    pub image: Option<String>,
}

/// `None` leaves a field untouched. `image: Some(None)` clears the image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct UpdateWorkspace {
    #[garde(length(min = 1, max = 256))]
    pub name: Option<String>,

    #[garde(skip)]
    pub image: Option<Option<String>>,
}
