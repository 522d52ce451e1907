use derive_new::new;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIs, EnumString, VariantArray};
use time::OffsetDateTime;
use utoipa::ToSchema;

use crate::data::{
    id::entity_id, members::MemberId, projects::ProjectId,
    workspaces::WorkspaceId,
};

entity_id!(TaskId);

#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIs,
    EnumString,
    VariantArray,
    ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Backlog,
    Todo,
    InProgress,
    InReview,
    /// Terminal status.
    Done,
}

#[derive(
    Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, new, ToSchema,
)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub workspace_id: WorkspaceId,
    pub project_id: ProjectId,
    #[new(into)]
    pub name: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub assignee_id: Option<MemberId>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub due_date: Option<OffsetDateTime>,
    /// Ordering key within a status column.
    pub position: u32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskChanges {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub status: Option<TaskStatus>,
    pub project_id: Option<ProjectId>,
    pub assignee_id: Option<Option<MemberId>>,
    pub due_date: Option<Option<OffsetDateTime>>,
    pub position: Option<u32>,
}

impl TaskChanges {
    pub fn apply(self, task: &mut Task, now: OffsetDateTime) {
        if let Some(name) = self.name {
            task.name = name;
        }

        if let Some(description) = self.description {
            task.description = description;
        }

        if let Some(status) = self.status {
            task.status = status;
        }

        if let Some(project_id) = self.project_id {
            task.project_id = project_id;
        }

        if let Some(assignee_id) = self.assignee_id {
            task.assignee_id = assignee_id;
        }

        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }

        if let Some(position) = self.position {
            task.position = position;
        }

        task.updated_at = now;
    }
}
