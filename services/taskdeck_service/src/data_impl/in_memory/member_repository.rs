use std::sync::Arc;

use async_trait::async_trait;
use derive_new::new;

use crate::{
    data::{
        members::{
            Member, MemberId, MemberRepository, MemberRepositoryError,
            MemberRepositoryErrorInner, MemberRole,
        },
        users::UserId,
        workspaces::WorkspaceId,
    },
    data_impl::in_memory::data::InMemoryDatabase,
};

#[derive(Debug, Clone, new)]
pub struct InMemoryMemberRepository {
    db: Arc<InMemoryDatabase>,
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn find(
        &self,
        workspace_id: &WorkspaceId,
        user_id: &UserId,
    ) -> Result<Option<Member>, MemberRepositoryError> {
        Ok(self
            .db
            .read()
            .members
            .iter()
            .find(|member| {
                member.workspace_id == *workspace_id
                    && member.user_id == *user_id
            })
            .cloned())
    }

    async fn get(
        &self,
        id: &MemberId,
    ) -> Result<Option<Member>, MemberRepositoryError> {
        Ok(self
            .db
            .read()
            .members
            .iter()
            .find(|member| member.id == *id)
            .cloned())
    }

    async fn list_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Member>, MemberRepositoryError> {
        Ok(self
            .db
            .read()
            .members
            .iter()
            .filter(|member| member.user_id == *user_id)
            .cloned()
            .collect())
    }

    async fn list_by_workspace(
        &self,
        workspace_id: &WorkspaceId,
    ) -> Result<Vec<Member>, MemberRepositoryError> {
        Ok(self
            .db
            .read()
            .members
            .iter()
            .filter(|member| member.workspace_id == *workspace_id)
            .cloned()
            .collect())
    }

    async fn count_by_workspace(
        &self,
        workspace_id: &WorkspaceId,
    ) -> Result<u64, MemberRepositoryError> {
        Ok(self
            .db
            .read()
            .members
            .iter()
            .filter(|member| member.workspace_id == *workspace_id)
            .count() as u64)
    }

    async fn create(
        &self,
        member: Member,
    ) -> Result<Member, MemberRepositoryError> {
        let mut tables = self.db.write();

        let exists = tables.members.iter().any(|existing| {
            existing.workspace_id == member.workspace_id
                && existing.user_id == member.user_id
        });

        if exists {
            return Err(MemberRepositoryErrorInner::AlreadyMember {
                user_id: member.user_id,
                workspace_id: member.workspace_id,
            }
            .into());
        }

        tables.members.push(member.clone());

        Ok(member)
    }

    async fn update_role(
        &self,
        id: &MemberId,
        role: MemberRole,
    ) -> Result<Option<Member>, MemberRepositoryError> {
        let mut tables = self.db.write();

        Ok(tables
            .members
            .iter_mut()
            .find(|member| member.id == *id)
            .map(|member| {
                member.role = role;
                member.clone()
            }))
    }

    async fn delete(
        &self,
        id: &MemberId,
    ) -> Result<bool, MemberRepositoryError> {
        let mut tables = self.db.write();
        let before = tables.members.len();

        tables.members.retain(|member| member.id != *id);

        Ok(tables.members.len() != before)
    }

    async fn delete_by_workspace(
        &self,
        workspace_id: &WorkspaceId,
    ) -> Result<u64, MemberRepositoryError> {
        let mut tables = self.db.write();
        let before = tables.members.len();

        tables
            .members
            .retain(|member| member.workspace_id != *workspace_id);

        Ok((before - tables.members.len()) as u64)
    }
}
