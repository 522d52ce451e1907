use async_trait::async_trait;

use crate::{
    data::{members::Member, users::UserId, workspaces::WorkspaceId},
    services::ServiceError,
};

/// Resolves the membership tying a user to a workspace. Every workspace,
/// project and task operation is gated on it.
#[async_trait]
pub trait MembershipService: Send + Sync + 'static {
    async fn get_member(
        &self,
        workspace_id: &WorkspaceId,
        user_id: &UserId,
    ) -> Result<Option<Member>, ServiceError>;

    /// Fails with `Unauthorized` when the user is not a member.
    async fn require_member(
        &self,
        workspace_id: &WorkspaceId,
        user_id: &UserId,
    ) -> Result<Member, ServiceError> {
        self.get_member(workspace_id, user_id)
            .await?
            .ok_or_else(ServiceError::unauthorized)
    }

    /// Fails with `Unauthorized` unless the user is an admin member.
    async fn require_admin(
        &self,
        workspace_id: &WorkspaceId,
        user_id: &UserId,
    ) -> Result<Member, ServiceError> {
        match self.get_member(workspace_id, user_id).await? {
            Some(member) if member.is_admin() => Ok(member),
            _ => Err(ServiceError::unauthorized()),
        }
    }
}

pub type DynMembershipService = Box<dyn MembershipService>;
