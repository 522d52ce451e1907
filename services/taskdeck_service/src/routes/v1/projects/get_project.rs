use axum::{Json, extract::State};
use axum_extra::routing::TypedPath;
use serde::Deserialize;

use crate::{
    data::projects::{Project, ProjectId},
    extractors::CurrentUser,
    response::{data::Data, error::ApiError},
    state::ServiceState,
};

#[derive(TypedPath, Deserialize, Debug)]
#[typed_path("/projects/{project_id}")]
pub struct GetProjectPath {
    pub project_id: ProjectId,
}

#[utoipa::path(
    get,
    path = "/projects/{project_id}",
    tag = "projects",
    params(("project_id" = String, Path, description = "Project id")),
    responses(
        (status = OK, description = "Success", body = Data<Project>),
        (status = UNAUTHORIZED, description = "Not a member", body = crate::response::error::ErrorBody),
        (status = NOT_FOUND, description = "Not found", body = crate::response::error::ErrorBody),
    )
)]
#[tracing::instrument(skip(state))]
pub async fn get_project(
    GetProjectPath { project_id }: GetProjectPath,
    State(state): State<ServiceState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Data<Project>>, ApiError> {
    let project = state
        .provider
        .project_service()
        .get(&user.id, &project_id)
        .await?;

    Ok(Json(Data::new(project)))
}
