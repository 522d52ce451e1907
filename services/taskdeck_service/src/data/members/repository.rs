use async_trait::async_trait;
use strum::{EnumDiscriminants, IntoDiscriminant};

use crate::data::{
    members::{Member, MemberId, MemberRole},
    users::UserId,
    workspaces::WorkspaceId,
};

#[async_trait]
pub trait MemberRepository: Send + Sync + 'static {
    async fn find(
        &self,
        workspace_id: &WorkspaceId,
        user_id: &UserId,
    ) -> Result<Option<Member>, MemberRepositoryError>;

    async fn get(
        &self,
        id: &MemberId,
    ) -> Result<Option<Member>, MemberRepositoryError>;

    async fn list_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Member>, MemberRepositoryError>;

    async fn list_by_workspace(
        &self,
        workspace_id: &WorkspaceId,
    ) -> Result<Vec<Member>, MemberRepositoryError>;

    async fn count_by_workspace(
        &self,
        workspace_id: &WorkspaceId,
    ) -> Result<u64, MemberRepositoryError>;

    /// Inserts the member, failing with
    /// [`MemberRepositoryErrorKind::AlreadyMember`] when the user already
    /// belongs to the workspace.
    async fn create(
        &self,
        member: Member,
    ) -> Result<Member, MemberRepositoryError>;

    async fn update_role(
        &self,
        id: &MemberId,
        role: MemberRole,
    ) -> Result<Option<Member>, MemberRepositoryError>;

    async fn delete(
        &self,
        id: &MemberId,
    ) -> Result<bool, MemberRepositoryError>;

    async fn delete_by_workspace(
        &self,
        workspace_id: &WorkspaceId,
    ) -> Result<u64, MemberRepositoryError>;
}

pub type DynMemberRepository = Box<dyn MemberRepository>;

#[derive(Debug, thiserror::Error)]
#[error("member repository error: {inner}")]
pub struct MemberRepositoryError {
    inner: MemberRepositoryErrorInner,
    kind: MemberRepositoryErrorKind,
}

impl MemberRepositoryError {
    pub fn kind(&self) -> MemberRepositoryErrorKind {
        self.kind
    }
}

impl<T: Into<MemberRepositoryErrorInner>> From<T> for MemberRepositoryError {
    fn from(inner: T) -> Self {
        let inner = inner.into();
        Self {
            kind: inner.discriminant(),
            inner,
        }
    }
}

#[derive(Debug, EnumDiscriminants, thiserror::Error)]
#[strum_discriminants(vis(pub), name(MemberRepositoryErrorKind))]
pub enum MemberRepositoryErrorInner {
    #[error(transparent)]
    Custom(#[from] eyre::Report),

    #[error("user '{user_id}' is already a member of workspace '{workspace_id}'")]
    AlreadyMember {
        user_id: UserId,
        workspace_id: WorkspaceId,
    },
}
