use axum::{Json, extract::State};
use axum_extra::routing::TypedPath;
use serde::Deserialize;

use crate::{
    data::workspaces::Workspace,
    extractors::CurrentUser,
    response::{
        data::{Data, Documents},
        error::ApiError,
    },
    state::ServiceState,
};

#[derive(TypedPath, Deserialize, Debug)]
#[typed_path("/workspaces")]
pub struct ListWorkspacesPath;

#[utoipa::path(
    get,
    path = "/workspaces",
    tag = "workspaces",
    description = "Workspaces the user is a member of, newest first",
    responses(
        (status = OK, description = "Success", body = Data<Documents<Workspace>>),
        (status = UNAUTHORIZED, description = "Unauthorized", body = crate::response::error::ErrorBody),
    )
)]
#[tracing::instrument(skip(state))]
pub async fn list_workspaces(
    _: ListWorkspacesPath,
    State(state): State<ServiceState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Data<Documents<Workspace>>>, ApiError> {
    let workspaces = state
        .provider
        .workspace_service()
        .list_for_user(&user.id)
        .await?;

    Ok(Json(Data::new(workspaces.into())))
}
