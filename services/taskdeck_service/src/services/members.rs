use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    data::{
        members::{Member, MemberId, MemberRole},
        users::{User, UserId},
        workspaces::WorkspaceId,
    },
    services::ServiceError,
};

#[async_trait]
pub trait MemberService: Send + Sync + 'static {
    async fn list(
        &self,
        user_id: &UserId,
        workspace_id: &WorkspaceId,
    ) -> Result<Vec<PopulatedMember>, ServiceError>;

    /// Only admins may change roles. The sole member of a workspace keeps
    /// its role.
    async fn update_role(
        &self,
        user_id: &UserId,
        member_id: &MemberId,
        role: MemberRole,
    ) -> Result<Member, ServiceError>;

    /// Admins may remove anyone, members only themselves. The sole member
    /// of a workspace cannot be removed.
    async fn delete(
        &self,
        user_id: &UserId,
        member_id: &MemberId,
    ) -> Result<MemberId, ServiceError>;
}

pub type DynMemberService = Box<dyn MemberService>;

/// A member together with the name and email of its user.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PopulatedMember {
    #[serde(flatten)]
    pub member: Member,
    pub name: String,
    pub email: String,
}

impl PopulatedMember {
    pub fn new(member: Member, user: Option<&User>) -> Self {
        let (name, email) = user
            .map(|user| (user.name.clone(), user.email.clone()))
            .unwrap_or_default();

        Self {
            member,
            name,
            email,
        }
    }
}
