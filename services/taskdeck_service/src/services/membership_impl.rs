use async_trait::async_trait;
use derive_new::new;

use crate::{
    data::{
        members::{DynMemberRepository, Member},
        users::UserId,
        workspaces::WorkspaceId,
    },
    services::{MembershipService, ServiceError},
};

#[derive(new)]
pub struct DefaultMembershipService {
    member_repository: DynMemberRepository,
}

#[async_trait]
impl MembershipService for DefaultMembershipService {
    async fn get_member(
        &self,
        workspace_id: &WorkspaceId,
        user_id: &UserId,
    ) -> Result<Option<Member>, ServiceError> {
        Ok(self.member_repository.find(workspace_id, user_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        data::members::MemberRole,
        services::{ServiceErrorKind, test_utils::Fixture},
    };

    #[tokio::test]
    async fn test_guard_requires_membership_row() {
        let fixture = Fixture::new();
        let (workspace, _) = fixture.workspace_with_admin("admin", "Acme");
        fixture.add_member(&workspace.id, "member", MemberRole::Member);
        let membership = fixture.provider.membership_service();

        assert!(
            membership
                .require_member(&workspace.id, &"member".into())
                .await
                .is_ok()
        );

        let error = membership
            .require_member(&workspace.id, &"stranger".into())
            .await
            .expect_err("stranger should be rejected");
        assert_eq!(error.kind(), ServiceErrorKind::Unauthorized);
    }

    #[tokio::test]
    async fn test_admin_guard_rejects_plain_members() {
        let fixture = Fixture::new();
        let (workspace, _) = fixture.workspace_with_admin("admin", "Acme");
        fixture.add_member(&workspace.id, "member", MemberRole::Member);
        let membership = fixture.provider.membership_service();

        assert!(
            membership
                .require_admin(&workspace.id, &"admin".into())
                .await
                .is_ok()
        );

        let error = membership
            .require_admin(&workspace.id, &"member".into())
            .await
            .expect_err("member should not pass the admin guard");
        assert_eq!(error.kind(), ServiceErrorKind::Unauthorized);
    }
}
