use derive_new::new;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;

use crate::data::{id::entity_id, users::UserId};

entity_id!(WorkspaceId);

#[derive(
    Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, new, ToSchema,
)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub id: WorkspaceId,
    #[new(into)]
    pub name: String,
    /// The user that created the workspace.
    pub user_id: UserId,
    #[new(into)]
    pub invite_code: String,
    pub image: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// The subset of a workspace shown to users who are not members yet.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct WorkspaceInfo {
    pub id: WorkspaceId,
    pub name: String,
    pub image: Option<String>,
}

impl From<Workspace> for WorkspaceInfo {
    fn from(workspace: Workspace) -> Self {
        Self {
            id: workspace.id,
            name: workspace.name,
            image: workspace.image,
        }
    }
}

/// Field changes for a workspace; `None` leaves the field untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WorkspaceChanges {
    pub name: Option<String>,
    pub image: Option<Option<String>>,
    pub invite_code: Option<String>,
}

impl WorkspaceChanges {
    pub fn apply(self, workspace: &mut Workspace, now: OffsetDateTime) {
        if let Some(name) = self.name {
            workspace.name = name;
        }

        if let Some(image) = self.image {
            workspace.image = image;
        }

        if let Some(invite_code) = self.invite_code {
            workspace.invite_code = invite_code;
        }

        workspace.updated_at = now;
    }
}
