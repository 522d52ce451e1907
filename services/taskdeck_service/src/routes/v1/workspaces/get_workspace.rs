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
#[typed_path("/workspaces/{workspace_id}")]
pub struct GetWorkspacePath {
    pub workspace_id: WorkspaceId,
}

#[utoipa::path(
    get,
    path = "/workspaces/{workspace_id}",
    tag = "workspaces",
    params(("workspace_id" = String, Path, description = "Workspace id")),
    responses(
        (status = OK, description = "Success", body = Data<Workspace>),
        (status = UNAUTHORIZED, description = "Not a member", body = crate::response::error::ErrorBody),
        (status = NOT_FOUND, description = "Not found", body = crate::response::error::ErrorBody),
    )
)]
#[tracing::instrument(skip(state))]
pub async fn get_workspace(
    GetWorkspacePath { workspace_id }: GetWorkspacePath,
    State(state): State<ServiceState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Data<Workspace>>, ApiError> {
    let workspace = state
        .provider
        .workspace_service()
        .get(&user.id, &workspace_id)
        .await?;

    Ok(Json(Data::new(workspace)))
}
