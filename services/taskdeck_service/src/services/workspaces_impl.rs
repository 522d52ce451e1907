use async_trait::async_trait;
use derive_new::new;

use crate::{
    clock::DynClock,
    data::{
        members::{
            DynMemberRepository, Member, MemberId, MemberRepositoryErrorKind,
            MemberRole,
        },
        projects::DynProjectRepository,
        tasks::{DynTaskRepository, TaskQuery},
        users::UserId,
        workspaces::{
            DynWorkspaceRepository, Workspace, WorkspaceChanges, WorkspaceId,
            WorkspaceInfo,
        },
    },
    services::{
        CreateWorkspace, DynMembershipService, ServiceError,
        ServiceErrorInner, UpdateWorkspace, WorkspaceService,
        generate_invite_code, invite_codes_match, normalize_name,
        validate_input,
    },
};

#[derive(new)]
pub struct DefaultWorkspaceService {
    workspace_repository: DynWorkspaceRepository,
    member_repository: DynMemberRepository,
    project_repository: DynProjectRepository,
    task_repository: DynTaskRepository,
    membership: DynMembershipService,
    clock: DynClock,
    invite_code_length: usize,
}

impl DefaultWorkspaceService {
    async fn load(
        &self,
        workspace_id: &WorkspaceId,
    ) -> Result<Workspace, ServiceError> {
        self.workspace_repository
            .get(workspace_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Workspace"))
    }

    async fn remove_member(&self, member_id: &MemberId) {
        if let Err(error) = self.member_repository.delete(member_id).await {
            tracing::error!(
                member_id = %member_id,
                "failed to remove member while rolling back: {error}"
            );
        }
    }
}

#[async_trait]
impl WorkspaceService for DefaultWorkspaceService {
    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Workspace>, ServiceError> {
        let members = self.member_repository.list_by_user(user_id).await?;

        if members.is_empty() {
            return Ok(vec![]);
        }

        let ids = members
            .into_iter()
            .map(|member| member.workspace_id)
            .collect::<Vec<_>>();

        Ok(self.workspace_repository.list_by_ids(&ids).await?)
    }

    async fn create(
        &self,
        user_id: &UserId,
        input: CreateWorkspace,
    ) -> Result<Workspace, ServiceError> {
        let input = CreateWorkspace {
            name: normalize_name(&input.name),
            ..input
        };
        validate_input(&input)?;

        let now = self.clock.now();
        let workspace = self
            .workspace_repository
            .create(Workspace::new(
                WorkspaceId::generate(),
                input.name,
                user_id.clone(),
                generate_invite_code(self.invite_code_length),
                input.image,
                now,
                now,
            ))
            .await?;

        let admin = Member::new(
            MemberId::generate(),
            user_id.clone(),
            workspace.id.clone(),
            MemberRole::Admin,
            now,
        );

        if let Err(error) = self.member_repository.create(admin).await {
            tracing::warn!(
                workspace_id = %workspace.id,
                "failed to record admin membership, removing workspace: {error}"
            );

            if let Err(cleanup) =
                self.workspace_repository.delete(&workspace.id).await
            {
                tracing::error!(
                    workspace_id = %workspace.id,
                    error = %cleanup,
                    "failed to remove workspace after membership failure"
                );
            }

            return Err(error.into());
        }

        tracing::info!(workspace_id = %workspace.id, "created workspace");

        Ok(workspace)
    }

    async fn get(
        &self,
        user_id: &UserId,
        workspace_id: &WorkspaceId,
    ) -> Result<Workspace, ServiceError> {
        self.membership.require_member(workspace_id, user_id).await?;

        self.load(workspace_id).await
    }

    async fn update(
        &self,
        user_id: &UserId,
        workspace_id: &WorkspaceId,
        input: UpdateWorkspace,
    ) -> Result<Workspace, ServiceError> {
        self.membership.require_admin(workspace_id, user_id).await?;

        let input = UpdateWorkspace {
            name: input.name.as_deref().map(normalize_name),
            ..input
        };
        validate_input(&input)?;

        let changes = WorkspaceChanges {
            name: input.name,
            image: input.image,
            invite_code: None,
        };

        self.workspace_repository
            .update(workspace_id, changes, self.clock.now())
            .await?
            .ok_or_else(|| ServiceError::not_found("Workspace"))
    }

    async fn delete(
        &self,
        user_id: &UserId,
        workspace_id: &WorkspaceId,
    ) -> Result<WorkspaceId, ServiceError> {
        self.membership.require_admin(workspace_id, user_id).await?;
        self.load(workspace_id).await?;

        let tasks = self
            .task_repository
            .delete_matching(&TaskQuery::in_workspace(workspace_id.clone()))
            .await?;
        let projects = self
            .project_repository
            .delete_by_workspace(workspace_id)
            .await?;
        let members = self
            .member_repository
            .delete_by_workspace(workspace_id)
            .await?;
        self.workspace_repository.delete(workspace_id).await?;

        tracing::info!(
            workspace_id = %workspace_id,
            tasks,
            projects,
            members,
            "deleted workspace"
        );

        Ok(workspace_id.clone())
    }

    async fn info(
        &self,
        workspace_id: &WorkspaceId,
    ) -> Result<WorkspaceInfo, ServiceError> {
        Ok(self.load(workspace_id).await?.into())
    }

    async fn reset_invite_code(
        &self,
        user_id: &UserId,
        workspace_id: &WorkspaceId,
    ) -> Result<Workspace, ServiceError> {
        self.membership.require_admin(workspace_id, user_id).await?;

        let changes = WorkspaceChanges {
            invite_code: Some(generate_invite_code(self.invite_code_length)),
            ..Default::default()
        };

        self.workspace_repository
            .update(workspace_id, changes, self.clock.now())
            .await?
            .ok_or_else(|| ServiceError::not_found("Workspace"))
    }

    async fn join(
        &self,
        user_id: &UserId,
        workspace_id: &WorkspaceId,
        code: &str,
    ) -> Result<Workspace, ServiceError> {
        if self
            .membership
            .get_member(workspace_id, user_id)
            .await?
            .is_some()
        {
            return Err(ServiceErrorInner::AlreadyMember.into());
        }

        let workspace = self.load(workspace_id).await?;
        if !invite_codes_match(&workspace.invite_code, code) {
            return Err(ServiceErrorInner::InvalidInviteCode.into());
        }

        let member = Member::new(
            MemberId::generate(),
            user_id.clone(),
            workspace_id.clone(),
            MemberRole::Member,
            self.clock.now(),
        );

        let member = match self.member_repository.create(member).await {
            Ok(member) => member,
            Err(error)
                if error.kind() == MemberRepositoryErrorKind::AlreadyMember =>
            {
                return Err(ServiceErrorInner::AlreadyMember.into());
            }
            Err(error) => return Err(error.into()),
        };

        // the code may have been reset between the check and the insert
        let current = match self.workspace_repository.get(workspace_id).await {
            Ok(current) => current,
            Err(error) => {
                self.remove_member(&member.id).await;
                return Err(error.into());
            }
        };

        match current {
            Some(current)
                if invite_codes_match(&current.invite_code, code) =>
            {
                tracing::info!(
                    workspace_id = %workspace_id,
                    member_id = %member.id,
                    "user joined workspace"
                );
                Ok(current)
            }
            _ => {
                tracing::warn!(
                    workspace_id = %workspace_id,
                    "invite code changed during join, rolling back membership"
                );
                self.remove_member(&member.id).await;
                Err(ServiceErrorInner::InvalidInviteCode.into())
            }
        }
    }
}
