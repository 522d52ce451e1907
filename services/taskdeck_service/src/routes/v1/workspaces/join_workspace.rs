use axum::{Json, extract::State};
use axum_extra::{extract::WithRejection, routing::TypedPath};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    data::workspaces::{Workspace, WorkspaceId},
    extractors::CurrentUser,
    response::{data::Data, error::ApiError},
    state::ServiceState,
};

#[derive(TypedPath, Deserialize, Debug)]
#[typed_path("/workspaces/{workspace_id}/join")]
pub struct JoinWorkspacePath {
    pub workspace_id: WorkspaceId,
}

#[derive(Deserialize, Serialize, ToSchema, Debug)]
pub struct JoinWorkspaceRequest {
    pub code: String,
}

#[utoipa::path(
    post,
    path = "/workspaces/{workspace_id}/join",
    tag = "workspaces",
    description = "Join with an invite code, compared case-insensitively",
    params(("workspace_id" = String, Path, description = "Workspace id")),
    request_body = JoinWorkspaceRequest,
    responses(
        (status = OK, description = "Success", body = Data<Workspace>),
        (status = BAD_REQUEST, description = "Already a Member, or Invalid Invite Code", body = crate::response::error::ErrorBody),
        (status = NOT_FOUND, description = "Not found", body = crate::response::error::ErrorBody),
    )
)]
#[tracing::instrument(skip(state, request))]
pub async fn join_workspace(
    JoinWorkspacePath { workspace_id }: JoinWorkspacePath,
    State(state): State<ServiceState>,
    CurrentUser(user): CurrentUser,
    WithRejection(Json(request), _): WithRejection<
        Json<JoinWorkspaceRequest>,
        ApiError,
    >,
) -> Result<Json<Data<Workspace>>, ApiError> {
    let workspace = state
        .provider
        .workspace_service()
        .join(&user.id, &workspace_id, &request.code)
        .await?;

    Ok(Json(Data::new(workspace)))
}
