use async_trait::async_trait;
use derive_new::new;

use crate::{
    clock::DynClock,
    data::{
        projects::{DynProjectRepository, Project, ProjectChanges, ProjectId},
        tasks::{DynTaskRepository, TaskQuery},
        users::UserId,
        workspaces::WorkspaceId,
    },
    services::{
        CreateProject, DynMembershipService, ProjectService, ServiceError,
        UpdateProject, normalize_name, validate_input,
    },
};

#[derive(new)]
pub struct DefaultProjectService {
    project_repository: DynProjectRepository,
    task_repository: DynTaskRepository,
    membership: DynMembershipService,
    clock: DynClock,
}

impl DefaultProjectService {
    /// Loads the project and checks the caller belongs to its workspace.
    async fn load_guarded(
        &self,
        user_id: &UserId,
        project_id: &ProjectId,
    ) -> Result<Project, ServiceError> {
        let project = self
            .project_repository
            .get(project_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Project"))?;

        self.membership
            .require_member(&project.workspace_id, user_id)
            .await?;

        Ok(project)
    }
}

#[async_trait]
impl ProjectService for DefaultProjectService {
    async fn list(
        &self,
        user_id: &UserId,
        workspace_id: &WorkspaceId,
    ) -> Result<Vec<Project>, ServiceError> {
        self.membership.require_member(workspace_id, user_id).await?;

        Ok(self
            .project_repository
            .list_by_workspace(workspace_id)
            .await?)
    }

    async fn create(
        &self,
        user_id: &UserId,
        input: CreateProject,
    ) -> Result<Project, ServiceError> {
        self.membership
            .require_member(&input.workspace_id, user_id)
            .await?;

        let input = CreateProject {
            name: normalize_name(&input.name),
            ..input
        };
        validate_input(&input)?;

        let now = self.clock.now();
        let project = self
            .project_repository
            .create(Project::new(
                ProjectId::generate(),
                input.workspace_id,
                input.name,
                input.image,
                now,
                now,
            ))
            .await?;

        tracing::info!(
            project_id = %project.id,
            workspace_id = %project.workspace_id,
            "created project"
        );

        Ok(project)
    }

    async fn get(
        &self,
        user_id: &UserId,
        project_id: &ProjectId,
    ) -> Result<Project, ServiceError> {
        self.load_guarded(user_id, project_id).await
    }

    async fn update(
        &self,
        user_id: &UserId,
        project_id: &ProjectId,
        input: UpdateProject,
    ) -> Result<Project, ServiceError> {
        self.load_guarded(user_id, project_id).await?;

        let input = UpdateProject {
            name: input.name.as_deref().map(normalize_name),
            ..input
        };
        validate_input(&input)?;

        let changes = ProjectChanges {
            name: input.name,
            image: input.image,
        };

        self.project_repository
            .update(project_id, changes, self.clock.now())
            .await?
            .ok_or_else(|| ServiceError::not_found("Project"))
    }

    async fn delete(
        &self,
        user_id: &UserId,
        project_id: &ProjectId,
    ) -> Result<ProjectId, ServiceError> {
        self.load_guarded(user_id, project_id).await?;

        let tasks = self
            .task_repository
            .delete_matching(&TaskQuery::in_project(project_id.clone()))
            .await?;
        self.project_repository.delete(project_id).await?;

        tracing::info!(project_id = %project_id, tasks, "deleted project");

        Ok(project_id.clone())
    }
}
