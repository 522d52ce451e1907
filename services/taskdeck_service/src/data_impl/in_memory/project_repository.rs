use std::sync::Arc;

use async_trait::async_trait;
use derive_new::new;
use time::OffsetDateTime;

use crate::{
    data::{
        projects::{
            Project, ProjectChanges, ProjectId, ProjectRepository,
            ProjectRepositoryError, ProjectRepositoryErrorInner,
        },
        workspaces::WorkspaceId,
    },
    data_impl::in_memory::data::InMemoryDatabase,
};

#[derive(Debug, Clone, new)]
pub struct InMemoryProjectRepository {
    db: Arc<InMemoryDatabase>,
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn get(
        &self,
        id: &ProjectId,
    ) -> Result<Option<Project>, ProjectRepositoryError> {
        Ok(self
            .db
            .read()
            .projects
            .iter()
            .find(|project| project.id == *id)
            .cloned())
    }

    async fn list_by_workspace(
        &self,
        workspace_id: &WorkspaceId,
    ) -> Result<Vec<Project>, ProjectRepositoryError> {
        let mut projects = self
            .db
            .read()
            .projects
            .iter()
            .filter(|project| project.workspace_id == *workspace_id)
            .cloned()
            .collect::<Vec<_>>();

        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(projects)
    }

    async fn create(
        &self,
        project: Project,
    ) -> Result<Project, ProjectRepositoryError> {
        let mut tables = self.db.write();

        if tables.projects.iter().any(|p| p.id == project.id) {
            return Err(
                ProjectRepositoryErrorInner::AlreadyExists(project.id).into()
            );
        }

        tables.projects.push(project.clone());

        Ok(project)
    }

    async fn update(
        &self,
        id: &ProjectId,
        changes: ProjectChanges,
        now: OffsetDateTime,
    ) -> Result<Option<Project>, ProjectRepositoryError> {
        let mut tables = self.db.write();

        Ok(tables
            .projects
            .iter_mut()
            .find(|project| project.id == *id)
            .map(|project| {
                changes.apply(project, now);
                project.clone()
            }))
    }

    async fn delete(
        &self,
        id: &ProjectId,
    ) -> Result<bool, ProjectRepositoryError> {
        let mut tables = self.db.write();
        let before = tables.projects.len();

        tables.projects.retain(|project| project.id != *id);

        Ok(tables.projects.len() != before)
    }

    async fn delete_by_workspace(
        &self,
        workspace_id: &WorkspaceId,
    ) -> Result<u64, ProjectRepositoryError> {
        let mut tables = self.db.write();
        let before = tables.projects.len();

        tables
            .projects
            .retain(|project| project.workspace_id != *workspace_id);

        Ok((before - tables.projects.len()) as u64)
    }
}
