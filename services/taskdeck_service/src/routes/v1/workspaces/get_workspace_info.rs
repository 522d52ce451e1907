use axum::{Json, extract::State};
use axum_extra::routing::TypedPath;
use serde::Deserialize;

use crate::{
    data::workspaces::{WorkspaceId, WorkspaceInfo},
    extractors::CurrentUser,
    response::{data::Data, error::ApiError},
    state::ServiceState,
};

#[derive(TypedPath, Deserialize, Debug)]
#[typed_path("/workspaces/{workspace_id}/info")]
pub struct GetWorkspaceInfoPath {
    pub workspace_id: WorkspaceId,
}

#[utoipa::path(
    get,
    path = "/workspaces/{workspace_id}/info",
    tag = "workspaces",
    description = "Name and image of a workspace, shown before joining",
    params(("workspace_id" = String, Path, description = "Workspace id")),
    responses(
        (status = OK, description = "Success", body = Data<WorkspaceInfo>),
        (status = NOT_FOUND, description = "Not found", body = crate::response::error::ErrorBody),
    )
)]
#[tracing::instrument(skip(state, _user))]
pub async fn get_workspace_info(
    GetWorkspaceInfoPath { workspace_id }: GetWorkspaceInfoPath,
    State(state): State<ServiceState>,
    CurrentUser(_user): CurrentUser,
) -> Result<Json<Data<WorkspaceInfo>>, ApiError> {
    let info = state
        .provider
        .workspace_service()
        .info(&workspace_id)
        .await?;

    Ok(Json(Data::new(info)))
}
