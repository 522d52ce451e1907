use axum::{
    Json,
    extract::{Multipart, State},
};
use axum_extra::{extract::WithRejection, routing::TypedPath};
use serde::Deserialize;

use crate::{
    data::projects::{Project, ProjectId},
    extractors::CurrentUser,
    response::{data::Data, error::ApiError},
    routes::v1::common::FormFields,
    services::UpdateProject,
    state::ServiceState,
};

#[derive(TypedPath, Deserialize, Debug)]
#[typed_path("/projects/{project_id}")]
pub struct UpdateProjectPath {
    pub project_id: ProjectId,
}

#[utoipa::path(
    patch,
    path = "/projects/{project_id}",
    tag = "projects",
    params(("project_id" = String, Path, description = "Project id")),
    request_body(content = super::ProjectForm, content_type = "multipart/form-data"),
    responses(
        (status = OK, description = "Success", body = Data<Project>),
        (status = BAD_REQUEST, description = "Invalid input", body = crate::response::error::ErrorBody),
        (status = UNAUTHORIZED, description = "Not a member", body = crate::response::error::ErrorBody),
        (status = NOT_FOUND, description = "Not found", body = crate::response::error::ErrorBody),
    )
)]
#[tracing::instrument(skip(state, multipart))]
pub async fn update_project(
    UpdateProjectPath { project_id }: UpdateProjectPath,
    State(state): State<ServiceState>,
    CurrentUser(user): CurrentUser,
    WithRejection(multipart, _): WithRejection<Multipart, ApiError>,
) -> Result<Json<Data<Project>>, ApiError> {
    let form = FormFields::read(multipart).await?;
    let input = UpdateProject {
        name: form.text("name").map(str::to_string),
        image: form.image("image"),
    };

    let project = state
        .provider
        .project_service()
        .update(&user.id, &project_id, input)
        .await?;

    Ok(Json(Data::new(project)))
}
