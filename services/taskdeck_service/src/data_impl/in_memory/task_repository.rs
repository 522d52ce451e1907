use std::sync::Arc;

use async_trait::async_trait;
use derive_new::new;
use time::OffsetDateTime;

use crate::{
    data::{
        tasks::{
            Task, TaskChanges, TaskId, TaskQuery, TaskRepository,
            TaskRepositoryError, TaskRepositoryErrorInner, TaskStatus,
        },
        workspaces::WorkspaceId,
    },
    data_impl::in_memory::data::InMemoryDatabase,
};

#[derive(Debug, Clone, new)]
pub struct InMemoryTaskRepository {
    db: Arc<InMemoryDatabase>,
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn get(
        &self,
        id: &TaskId,
    ) -> Result<Option<Task>, TaskRepositoryError> {
        Ok(self.db.read().tasks.iter().find(|task| task.id == *id).cloned())
    }

    async fn get_many(
        &self,
        ids: &[TaskId],
    ) -> Result<Vec<Task>, TaskRepositoryError> {
        Ok(self
            .db
            .read()
            .tasks
            .iter()
            .filter(|task| ids.contains(&task.id))
            .cloned()
            .collect())
    }

    async fn list(
        &self,
        query: &TaskQuery,
    ) -> Result<Vec<Task>, TaskRepositoryError> {
        let mut tasks = self
            .db
            .read()
            .tasks
            .iter()
            .filter(|task| query.matches(task))
            .cloned()
            .collect::<Vec<_>>();

        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(tasks)
    }

    async fn count(
        &self,
        query: &TaskQuery,
    ) -> Result<u64, TaskRepositoryError> {
        Ok(self
            .db
            .read()
            .tasks
            .iter()
            .filter(|task| query.matches(task))
            .count() as u64)
    }

    async fn highest_position(
        &self,
        workspace_id: &WorkspaceId,
        status: TaskStatus,
    ) -> Result<Option<u32>, TaskRepositoryError> {
        Ok(self
            .db
            .read()
            .tasks
            .iter()
            .filter(|task| {
                task.workspace_id == *workspace_id && task.status == status
            })
            .map(|task| task.position)
            .max())
    }

    async fn create(&self, task: Task) -> Result<Task, TaskRepositoryError> {
        let mut tables = self.db.write();

        if tables.tasks.iter().any(|t| t.id == task.id) {
            return Err(TaskRepositoryErrorInner::AlreadyExists(task.id).into());
        }

        tables.tasks.push(task.clone());

        Ok(task)
    }

    async fn update(
        &self,
        id: &TaskId,
        changes: TaskChanges,
        now: OffsetDateTime,
    ) -> Result<Option<Task>, TaskRepositoryError> {
        let mut tables = self.db.write();

        Ok(tables.tasks.iter_mut().find(|task| task.id == *id).map(|task| {
            changes.apply(task, now);
            task.clone()
        }))
    }

    async fn update_many(
        &self,
        changes: Vec<(TaskId, TaskChanges)>,
        now: OffsetDateTime,
    ) -> Result<Vec<Task>, TaskRepositoryError> {
        let mut tables = self.db.write();

        let mut indices = Vec::with_capacity(changes.len());
        for (id, _) in &changes {
            let index = tables
                .tasks
                .iter()
                .position(|task| task.id == *id)
                .ok_or_else(|| {
                    TaskRepositoryErrorInner::DoesNotExist(id.clone())
                })?;
            indices.push(index);
        }

        let mut updated = Vec::with_capacity(changes.len());
        for (index, (_, change)) in indices.into_iter().zip(changes) {
            let task = &mut tables.tasks[index];
            change.apply(task, now);
            updated.push(task.clone());
        }

        Ok(updated)
    }

    async fn delete(&self, id: &TaskId) -> Result<bool, TaskRepositoryError> {
        let mut tables = self.db.write();
        let before = tables.tasks.len();

        tables.tasks.retain(|task| task.id != *id);

        Ok(tables.tasks.len() != before)
    }

    async fn delete_matching(
        &self,
        query: &TaskQuery,
    ) -> Result<u64, TaskRepositoryError> {
        let mut tables = self.db.write();
        let before = tables.tasks.len();

        tables.tasks.retain(|task| !query.matches(task));

        Ok((before - tables.tasks.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;
    use crate::data::tasks::{DateWindow, StatusFilter, TaskRepositoryErrorKind};

    fn task(id: &str, status: TaskStatus, created_at: OffsetDateTime) -> Task {
        Task::new(
            id.into(),
            "ws-1".into(),
            "project-1".into(),
            format!("task {id}"),
            None,
            status,
            None,
            None,
            1000,
            created_at,
            created_at,
        )
    }

    async fn repository() -> InMemoryTaskRepository {
        let repository =
            InMemoryTaskRepository::new(Arc::new(InMemoryDatabase::default()));

        for (id, status, created_at) in [
            ("t1", TaskStatus::Todo, datetime!(2024-02-10 00:00 UTC)),
            ("t2", TaskStatus::Done, datetime!(2024-03-02 00:00 UTC)),
            ("t3", TaskStatus::Todo, datetime!(2024-03-05 00:00 UTC)),
        ] {
            repository
                .create(task(id, status, created_at))
                .await
                .expect("should create task");
        }

        repository
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let repository = repository().await;

        let tasks = repository
            .list(&TaskQuery::in_workspace("ws-1".into()))
            .await
            .expect("should list");

        let ids = tasks.iter().map(|t| t.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["t3", "t2", "t1"]);
    }

    #[tokio::test]
    async fn test_count_with_window_and_status() {
        let repository = repository().await;
        let march = DateWindow::month_of(datetime!(2024-03-15 00:00 UTC))
            .expect("should compute window");

        let query = TaskQuery::in_workspace("ws-1".into())
            .status(StatusFilter::IsNot(TaskStatus::Done))
            .created_within(march);

        assert_eq!(repository.count(&query).await.expect("should count"), 1);
    }

    #[tokio::test]
    async fn test_update_many_is_all_or_nothing() {
        let repository = repository().await;
        let now = datetime!(2024-03-20 00:00 UTC);

        let error = repository
            .update_many(
                vec![
                    (
                        "t1".into(),
                        TaskChanges {
                            position: Some(5000),
                            ..Default::default()
                        },
                    ),
                    ("missing".into(), TaskChanges::default()),
                ],
                now,
            )
            .await
            .expect_err("should fail for unknown task");

        assert_eq!(error.kind(), TaskRepositoryErrorKind::DoesNotExist);

        let t1 = repository
            .get(&"t1".into())
            .await
            .expect("should get")
            .expect("should exist");
        assert_eq!(t1.position, 1000);
    }

    #[tokio::test]
    async fn test_highest_position_per_status() {
        let repository = repository().await;
        repository
            .update(
                &"t3".into(),
                TaskChanges {
                    position: Some(3000),
                    ..Default::default()
                },
                datetime!(2024-03-06 00:00 UTC),
            )
            .await
            .expect("should update");

        let todo = repository
            .highest_position(&"ws-1".into(), TaskStatus::Todo)
            .await
            .expect("should query");
        let review = repository
            .highest_position(&"ws-1".into(), TaskStatus::InReview)
            .await
            .expect("should query");

        assert_eq!(todo, Some(3000));
        assert_eq!(review, None);
    }
}
