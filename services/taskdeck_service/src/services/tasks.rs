use async_trait::async_trait;
use garde::Validate;
use serde::{Deserialize, Deserializer, Serialize};
use time::{Date, OffsetDateTime};
use utoipa::ToSchema;

use crate::{
    data::{
        members::MemberId,
        projects::{Project, ProjectId},
        tasks::{StatusFilter, Task, TaskId, TaskQuery, TaskStatus},
        users::UserId,
        workspaces::WorkspaceId,
    },
    services::{PopulatedMember, ServiceError},
};

/// Gap left between neighbouring positions in a status column.
pub const POSITION_STEP: u32 = 1000;

#[async_trait]
pub trait TaskService: Send + Sync + 'static {
    async fn list(
        &self,
        user_id: &UserId,
        filter: TaskFilter,
    ) -> Result<Vec<PopulatedTask>, ServiceError>;

    async fn create(
        &self,
        user_id: &UserId,
        input: CreateTask,
    ) -> Result<Task, ServiceError>;

    async fn get(
        &self,
        user_id: &UserId,
        task_id: &TaskId,
    ) -> Result<PopulatedTask, ServiceError>;

    async fn update(
        &self,
        user_id: &UserId,
        task_id: &TaskId,
        input: UpdateTask,
    ) -> Result<Task, ServiceError>;

    async fn delete(
        &self,
        user_id: &UserId,
        task_id: &TaskId,
    ) -> Result<TaskId, ServiceError>;

    /// Moves tasks between columns. Every task must exist and all must
    /// belong to the same workspace.
    async fn bulk_update(
        &self,
        user_id: &UserId,
        input: BulkUpdateTasks,
    ) -> Result<Vec<Task>, ServiceError>;
}

pub type DynTaskService = Box<dyn TaskService>;

/// A task with its project and assignee resolved, when those still exist.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct PopulatedTask {
    #[serde(flatten)]
    pub task: Task,
    pub project: Option<Project>,
    pub assignee: Option<PopulatedMember>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFilter {
    pub workspace_id: WorkspaceId,
    pub project_id: Option<ProjectId>,
    pub status: Option<TaskStatus>,
    pub assignee_id: Option<MemberId>,
    pub search: Option<String>,
    pub due_date: Option<Date>,
}

impl TaskFilter {
    pub fn new(workspace_id: WorkspaceId) -> Self {
        Self {
            workspace_id,
            project_id: None,
            status: None,
            assignee_id: None,
            search: None,
            due_date: None,
        }
    }

    pub fn to_query(&self) -> TaskQuery {
        let mut query = TaskQuery::in_workspace(self.workspace_id.clone());

        if let Some(project_id) = &self.project_id {
            query = query.project(project_id.clone());
        }

        if let Some(status) = self.status {
            query = query.status(StatusFilter::Is(status));
        }

        if let Some(assignee_id) = &self.assignee_id {
            query = query.assigned_to(assignee_id.clone());
        }

        if let Some(search) = &self.search {
            query = query.search(search.clone());
        }

        if let Some(date) = self.due_date {
            query = query.due_on(date);
        }

        query
    }
}

#[derive(
    Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Validate, ToSchema,
)]
#[serde(rename_all = "camelCase")]
#[garde(allow_unvalidated)]
pub struct CreateTask {
    pub workspace_id: WorkspaceId,
    pub project_id: ProjectId,

    #[garde(length(min = 1, max = 256))]
    pub name: String,

    pub status: TaskStatus,

    #[serde(default)]
    pub assignee_id: Option<MemberId>,

    #[serde(default, with = "time::serde::rfc3339::option")]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub due_date: Option<OffsetDateTime>,

    #[serde(default)]
    #[garde(length(max = 4096))]
    pub description: Option<String>,
}

/// Absent fields are left untouched; `null` clears nullable fields.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[garde(allow_unvalidated)]
pub struct UpdateTask {
    #[serde(default)]
    #[garde(length(min = 1, max = 256))]
    pub name: Option<String>,

    #[serde(default)]
    pub status: Option<TaskStatus>,

    #[serde(default)]
    pub project_id: Option<ProjectId>,

    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub assignee_id: Option<Option<MemberId>>,

    #[serde(default, deserialize_with = "nullable_datetime")]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub due_date: Option<Option<OffsetDateTime>>,

    #[serde(default, deserialize_with = "nullable")]
    #[garde(length(max = 4096))]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,

    #[serde(default)]
    #[garde(range(min = 1000, max = 1_000_000))]
    pub position: Option<u32>,
}

#[derive(
    Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Validate, ToSchema,
)]
pub struct BulkUpdateTasks {
    #[garde(length(min = 1), dive)]
    pub tasks: Vec<TaskMove>,
}

#[derive(
    Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Validate, ToSchema,
)]
#[garde(allow_unvalidated)]
pub struct TaskMove {
    #[serde(rename = "$id", alias = "id")]
    pub id: TaskId,

    pub status: TaskStatus,

    #[garde(range(min = 1000, max = 1_000_000))]
    pub position: u32,
}

fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn nullable_datetime<'de, D>(
    deserializer: D,
) -> Result<Option<Option<OffsetDateTime>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Instant(
        #[serde(with = "time::serde::rfc3339::option")] Option<OffsetDateTime>,
    );

    Instant::deserialize(deserializer).map(|instant| Some(instant.0))
}

#[cfg(test)]
mod tests {
    use garde::Validate as _;
    use time::macros::date;

    use super::*;

    #[test]
    fn test_update_distinguishes_missing_and_null() {
        let update: UpdateTask =
            serde_json::from_str(r#"{ "assigneeId": null, "name": "Renamed" }"#)
                .expect("should parse");

        assert_eq!(update.assignee_id, Some(None));
        assert_eq!(update.due_date, None);
        assert_eq!(update.name.as_deref(), Some("Renamed"));

        let update: UpdateTask = serde_json::from_str(
            r#"{ "dueDate": "2024-03-20T10:00:00Z", "description": null }"#,
        )
        .expect("should parse");

        assert!(matches!(update.due_date, Some(Some(_))));
        assert_eq!(update.description, Some(None));
    }

    #[test]
    fn test_bulk_positions_are_bounded() {
        let input: BulkUpdateTasks = serde_json::from_str(
            r#"{
                "tasks": [ { "$id": "t1", "status": "DONE", "position": 999 } ]
            }"#,
        )
        .expect("should parse");

        assert!(input.validate().is_err());

        let input: BulkUpdateTasks = serde_json::from_str(
            r#"{
                "tasks": [ { "id": "t1", "status": "TODO", "position": 2000 } ]
            }"#,
        )
        .expect("should parse");

        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_filter_to_query() {
        let mut filter = TaskFilter::new("ws".into());
        filter.status = Some(TaskStatus::Todo);
        filter.due_date = Some(date!(2024-03-20));

        let query = filter.to_query();

        assert_eq!(query.workspace_id, Some("ws".into()));
        assert_eq!(query.due_on, Some(date!(2024-03-20)));
        assert!(query.project_id.is_none());
    }
}
