use axum::{Json, extract::State};
use axum_extra::routing::TypedPath;
use serde::Deserialize;

use crate::{
    data::workspaces::{Workspace, WorkspaceId},
    extractors::CurrentUser,
    response::{data::Data, error::ApiError},
    state::ServiceState,
};

#[derive(TypedPath, Deserialize, Debug)]
#[typed_path("/workspaces/{workspace_id}/reset-invite-code")]
pub struct ResetInviteCodePath {
    pub workspace_id: WorkspaceId,
}

#[utoipa::path(
    post,
    path = "/workspaces/{workspace_id}/reset-invite-code",
    tag = "workspaces",
    description = "Replace the invite code; the previous code stops working",
    params(("workspace_id" = String, Path, description = "Workspace id")),
    responses(
        (status = OK, description = "Success", body = Data<Workspace>),
        (status = UNAUTHORIZED, description = "Not an admin", body = crate::response::error::ErrorBody),
    )
)]
#[tracing::instrument(skip(state))]
pub async fn reset_invite_code(
    ResetInviteCodePath { workspace_id }: ResetInviteCodePath,
    State(state): State<ServiceState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Data<Workspace>>, ApiError> {
    let workspace = state
        .provider
        .workspace_service()
        .reset_invite_code(&user.id, &workspace_id)
        .await?;

    Ok(Json(Data::new(workspace)))
}
