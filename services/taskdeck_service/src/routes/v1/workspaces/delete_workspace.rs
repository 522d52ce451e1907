use axum::{Json, extract::State};
use axum_extra::routing::TypedPath;
use serde::Deserialize;

use crate::{
    data::workspaces::WorkspaceId,
    extractors::CurrentUser,
    response::{
        data::{Data, Deleted},
        error::ApiError,
    },
    state::ServiceState,
};

#[derive(TypedPath, Deserialize, Debug)]
#[typed_path("/workspaces/{workspace_id}")]
pub struct DeleteWorkspacePath {
    pub workspace_id: WorkspaceId,
}

#[utoipa::path(
    delete,
    path = "/workspaces/{workspace_id}",
    tag = "workspaces",
    description = "Delete the workspace with its projects, tasks and members; admins only",
    params(("workspace_id" = String, Path, description = "Workspace id")),
    responses(
        (status = OK, description = "Success", body = Data<Deleted<WorkspaceId>>),
        (status = UNAUTHORIZED, description = "Not an admin", body = crate::response::error::ErrorBody),
        (status = NOT_FOUND, description = "Not found", body = crate::response::error::ErrorBody),
    )
)]
#[tracing::instrument(skip(state))]
pub async fn delete_workspace(
    DeleteWorkspacePath { workspace_id }: DeleteWorkspacePath,
    State(state): State<ServiceState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Data<Deleted<WorkspaceId>>>, ApiError> {
    let id = state
        .provider
        .workspace_service()
        .delete(&user.id, &workspace_id)
        .await?;

    Ok(Json(Data::new(Deleted::new(id))))
}
