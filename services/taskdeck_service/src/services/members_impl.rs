use async_trait::async_trait;
use derive_new::new;

use crate::{
    data::{
        members::{DynMemberRepository, Member, MemberId, MemberRole},
        users::{DynUserRepository, UserId},
        workspaces::WorkspaceId,
    },
    services::{
        DynMembershipService, MemberService, PopulatedMember, ServiceError,
        ServiceErrorInner,
    },
};

#[derive(new)]
pub struct DefaultMemberService {
    member_repository: DynMemberRepository,
    user_repository: DynUserRepository,
    membership: DynMembershipService,
}

impl DefaultMemberService {
    async fn load(&self, member_id: &MemberId) -> Result<Member, ServiceError> {
        self.member_repository
            .get(member_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Member"))
    }

    async fn ensure_not_last(
        &self,
        workspace_id: &WorkspaceId,
    ) -> Result<(), ServiceError> {
        if self
            .member_repository
            .count_by_workspace(workspace_id)
            .await?
            <= 1
        {
            return Err(ServiceErrorInner::LastMember.into());
        }

        Ok(())
    }
}

#[async_trait]
impl MemberService for DefaultMemberService {
    async fn list(
        &self,
        user_id: &UserId,
        workspace_id: &WorkspaceId,
    ) -> Result<Vec<PopulatedMember>, ServiceError> {
        self.membership.require_member(workspace_id, user_id).await?;

        let members =
            self.member_repository.list_by_workspace(workspace_id).await?;
        let user_ids = members
            .iter()
            .map(|member| member.user_id.clone())
            .collect::<Vec<_>>();
        let users = self.user_repository.get_many(&user_ids).await?;

        Ok(members
            .into_iter()
            .map(|member| {
                let user = users.iter().find(|user| user.id == member.user_id);
                PopulatedMember::new(member, user)
            })
            .collect())
    }

    async fn update_role(
        &self,
        user_id: &UserId,
        member_id: &MemberId,
        role: MemberRole,
    ) -> Result<Member, ServiceError> {
        let target = self.load(member_id).await?;
        self.membership
            .require_admin(&target.workspace_id, user_id)
            .await?;
        self.ensure_not_last(&target.workspace_id).await?;

        self.member_repository
            .update_role(member_id, role)
            .await?
            .ok_or_else(|| ServiceError::not_found("Member"))
    }

    async fn delete(
        &self,
        user_id: &UserId,
        member_id: &MemberId,
    ) -> Result<MemberId, ServiceError> {
        let target = self.load(member_id).await?;
        let acting = self
            .membership
            .require_member(&target.workspace_id, user_id)
            .await?;

        if acting.id != target.id && !acting.is_admin() {
            return Err(ServiceError::unauthorized());
        }

        self.ensure_not_last(&target.workspace_id).await?;
        self.member_repository.delete(member_id).await?;

        tracing::info!(
            member_id = %member_id,
            workspace_id = %target.workspace_id,
            "removed member"
        );

        Ok(member_id.clone())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        data::members::MemberRole,
        services::{ServiceErrorKind, test_utils::Fixture},
    };

    #[tokio::test]
    async fn test_list_populates_user_details() {
        let fixture = Fixture::new();
        let (workspace, _) = fixture.workspace_with_admin("admin", "Acme");
        fixture.add_member(&workspace.id, "member", MemberRole::Member);

        let members = fixture
            .provider
            .member_service()
            .list(&"member".into(), &workspace.id)
            .await
            .expect("should list");

        assert_eq!(members.len(), 2);
        let admin = members
            .iter()
            .find(|m| m.member.role == MemberRole::Admin)
            .expect("admin should be listed");
        assert_eq!(admin.name, "Ada Admin");
        assert_eq!(admin.email, "admin@example.com");
    }

    #[tokio::test]
    async fn test_sole_member_cannot_leave_or_be_downgraded() {
        let fixture = Fixture::new();
        let (_, admin) = fixture.workspace_with_admin("admin", "Acme");
        let service = fixture.provider.member_service();

        let error = service
            .delete(&"admin".into(), &admin.id)
            .await
            .expect_err("sole member cannot leave");
        assert_eq!(error.kind(), ServiceErrorKind::LastMember);

        let error = service
            .update_role(&"admin".into(), &admin.id, MemberRole::Member)
            .await
            .expect_err("sole member cannot be downgraded");
        assert_eq!(error.kind(), ServiceErrorKind::LastMember);

        assert_eq!(fixture.db.snapshot().members.len(), 1);
    }

    #[tokio::test]
    async fn test_members_can_only_remove_themselves() {
        let fixture = Fixture::new();
        let (workspace, admin) = fixture.workspace_with_admin("admin", "Acme");
        let member =
            fixture.add_member(&workspace.id, "member", MemberRole::Member);
        let joiner =
            fixture.add_member(&workspace.id, "joiner", MemberRole::Member);
        let service = fixture.provider.member_service();

        let error = service
            .delete(&"member".into(), &admin.id)
            .await
            .expect_err("member cannot remove admin");
        assert_eq!(error.kind(), ServiceErrorKind::Unauthorized);

        service
            .delete(&"member".into(), &member.id)
            .await
            .expect("member can leave");

        service
            .delete(&"admin".into(), &joiner.id)
            .await
            .expect("admin can remove members");

        assert_eq!(fixture.db.snapshot().members.len(), 1);
    }

    #[tokio::test]
    async fn test_update_role_requires_admin() {
        let fixture = Fixture::new();
        let (workspace, _) = fixture.workspace_with_admin("admin", "Acme");
        let member =
            fixture.add_member(&workspace.id, "member", MemberRole::Member);
        let service = fixture.provider.member_service();

        let error = service
            .update_role(&"member".into(), &member.id, MemberRole::Admin)
            .await
            .expect_err("member cannot promote itself");
        assert_eq!(error.kind(), ServiceErrorKind::Unauthorized);

        let promoted = service
            .update_role(&"admin".into(), &member.id, MemberRole::Admin)
            .await
            .expect("admin can promote");
        assert!(promoted.is_admin());
    }
}
