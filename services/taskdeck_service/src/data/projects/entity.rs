use derive_new::new;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;

use crate::data::{id::entity_id, workspaces::WorkspaceId};

entity_id!(ProjectId);

#[derive(
    Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, new, ToSchema,
)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub workspace_id: WorkspaceId,
    #[new(into)]
    pub name: String,
    pub image: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectChanges {
    pub name: Option<String>,
    pub image: Option<Option<String>>,
}

impl ProjectChanges {
    pub fn apply(self, project: &mut Project, now: OffsetDateTime) {
        if let Some(name) = self.name {
            project.name = name;
        }

        if let Some(image) = self.image {
            project.image = image;
        }

        project.updated_at = now;
    }
}
