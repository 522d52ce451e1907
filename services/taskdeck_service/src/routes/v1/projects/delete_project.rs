use axum::{Json, extract::State};
use axum_extra::routing::TypedPath;
use serde::Deserialize;

use crate::{
    data::projects::ProjectId,
    extractors::CurrentUser,
    response::{
        data::{Data, Deleted},
        error::ApiError,
    },
    state::ServiceState,
};

#[derive(TypedPath, Deserialize, Debug)]
#[typed_path("/projects/{project_id}")]
pub struct DeleteProjectPath {
    pub project_id: ProjectId,
}

#[utoipa::path(
    delete,
    path = "/projects/{project_id}",
    tag = "projects",
    description = "Delete the project and its tasks",
    params(("project_id" = String, Path, description = "Project id")),
    responses(
        (status = OK, description = "Success", body = Data<Deleted<ProjectId>>),
        (status = UNAUTHORIZED, description = "Not a member", body = crate::response::error::ErrorBody),
        (status = NOT_FOUND, description = "Not found", body = crate::response::error::ErrorBody),
    )
)]
#[tracing::instrument(skip(state))]
pub async fn delete_project(
    DeleteProjectPath { project_id }: DeleteProjectPath,
    State(state): State<ServiceState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Data<Deleted<ProjectId>>>, ApiError> {
    let id = state
        .provider
        .project_service()
        .delete(&user.id, &project_id)
        .await?;

    Ok(Json(Data::new(Deleted::new(id))))
}
