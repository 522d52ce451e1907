use std::sync::Arc;

use async_trait::async_trait;
use derive_new::new;
use time::OffsetDateTime;

use crate::{
    data::workspaces::{
        Workspace, WorkspaceChanges, WorkspaceId, WorkspaceRepository,
        WorkspaceRepositoryError, WorkspaceRepositoryErrorInner,
    },
    data_impl::in_memory::data::InMemoryDatabase,
};

#[derive(Debug, Clone, new)]
pub struct InMemoryWorkspaceRepository {
    db: Arc<InMemoryDatabase>,
}

#[async_trait]
impl WorkspaceRepository for InMemoryWorkspaceRepository {
    async fn get(
        &self,
        id: &WorkspaceId,
    ) -> Result<Option<Workspace>, WorkspaceRepositoryError> {
        Ok(self
            .db
            .read()
            .workspaces
            .iter()
            .find(|workspace| workspace.id == *id)
            .cloned())
    }

    async fn list_by_ids(
        &self,
        ids: &[WorkspaceId],
    ) -> Result<Vec<Workspace>, WorkspaceRepositoryError> {
        let mut workspaces = self
            .db
            .read()
            .workspaces
            .iter()
            .filter(|workspace| ids.contains(&workspace.id))
            .cloned()
            .collect::<Vec<_>>();

        workspaces.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(workspaces)
    }

    async fn create(
        &self,
        workspace: Workspace,
    ) -> Result<Workspace, WorkspaceRepositoryError> {
        let mut tables = self.db.write();

        if tables.workspaces.iter().any(|w| w.id == workspace.id) {
            return Err(WorkspaceRepositoryErrorInner::AlreadyExists(
                workspace.id,
            )
            .into());
        }

        tables.workspaces.push(workspace.clone());

        Ok(workspace)
    }

    async fn update(
        &self,
        id: &WorkspaceId,
        changes: WorkspaceChanges,
        now: OffsetDateTime,
    ) -> Result<Option<Workspace>, WorkspaceRepositoryError> {
        let mut tables = self.db.write();

        Ok(tables
            .workspaces
            .iter_mut()
            .find(|workspace| workspace.id == *id)
            .map(|workspace| {
                changes.apply(workspace, now);
                workspace.clone()
            }))
    }

    async fn delete(
        &self,
        id: &WorkspaceId,
    ) -> Result<bool, WorkspaceRepositoryError> {
        let mut tables = self.db.write();
        let before = tables.workspaces.len();

        tables.workspaces.retain(|workspace| workspace.id != *id);

        Ok(tables.workspaces.len() != before)
    }
}
