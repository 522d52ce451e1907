use axum::{
    Json,
    extract::{Multipart, State},
};
use axum_extra::{extract::WithRejection, routing::TypedPath};
use serde::Deserialize;

use crate::{
    data::projects::Project,
    extractors::CurrentUser,
    response::{data::Data, error::ApiError},
    routes::v1::common::FormFields,
    services::CreateProject,
    state::ServiceState,
};

#[derive(TypedPath, Deserialize, Debug)]
#[typed_path("/projects")]
pub struct CreateProjectPath;

#[utoipa::path(
    post,
    path = "/projects",
    tag = "projects",
    request_body(content = super::ProjectForm, content_type = "multipart/form-data"),
    responses(
        (status = OK, description = "Success", body = Data<Project>),
        (status = BAD_REQUEST, description = "Invalid input", body = crate::response::error::ErrorBody),
        (status = UNAUTHORIZED, description = "Not a member", body = crate::response::error::ErrorBody),
    )
)]
#[tracing::instrument(skip(state, multipart))]
pub async fn create_project(
    _: CreateProjectPath,
    State(state): State<ServiceState>,
    CurrentUser(user): CurrentUser,
    WithRejection(multipart, _): WithRejection<Multipart, ApiError>,
) -> Result<Json<Data<Project>>, ApiError> {
    let form = FormFields::read(multipart).await?;
    let input = CreateProject::new(
        form.required_text("workspaceId")?.into(),
        form.required_text("name")?,
        form.image("image").flatten(),
    );

    let project = state
        .provider
        .project_service()
        .create(&user.id, input)
        .await?;

    Ok(Json(Data::new(project)))
}
