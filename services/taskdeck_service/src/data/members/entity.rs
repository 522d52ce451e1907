use derive_new::new;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIs, EnumString};
use time::OffsetDateTime;
use utoipa::ToSchema;

use crate::data::{id::entity_id, users::UserId, workspaces::WorkspaceId};

entity_id!(MemberId);

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
    ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberRole {
    Admin,
    Member,
}

/// Grants a user a role within a workspace. There is at most one member
/// per (user, workspace) pair.
#[derive(
    Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, new, ToSchema,
)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: MemberId,
    pub user_id: UserId,
    pub workspace_id: WorkspaceId,
    pub role: MemberRole,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Member {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
