use axum::{
    Json,
    extract::{Multipart, State},
};
use axum_extra::{extract::WithRejection, routing::TypedPath};
use serde::Deserialize;

use crate::{
    data::workspaces::Workspace,
    extractors::CurrentUser,
    response::{data::Data, error::ApiError},
    routes::v1::common::FormFields,
    services::CreateWorkspace,
    state::ServiceState,
};

#[derive(TypedPath, Deserialize, Debug)]
#[typed_path("/workspaces")]
pub struct CreateWorkspacePath;

#[utoipa::path(
    post,
    path = "/workspaces",
    tag = "workspaces",
    description = "Create a workspace; the caller becomes its admin",
    request_body(content = super::WorkspaceForm, content_type = "multipart/form-data"),
    responses(
        (status = OK, description = "Success", body = Data<Workspace>),
        (status = BAD_REQUEST, description = "Invalid input", body = crate::response::error::ErrorBody),
        (status = UNAUTHORIZED, description = "Unauthorized", body = crate::response::error::ErrorBody),
    )
)]
#[tracing::instrument(skip(state, multipart))]
pub async fn create_workspace(
    _: CreateWorkspacePath,
    State(state): State<ServiceState>,
    CurrentUser(user): CurrentUser,
    WithRejection(multipart, _): WithRejection<Multipart, ApiError>,
) -> Result<Json<Data<Workspace>>, ApiError> {
    let form = FormFields::read(multipart).await?;
    let input = CreateWorkspace::new(
        form.required_text("name")?,
        form.image("image").flatten(),
    );

    let workspace = state
        .provider
        .workspace_service()
        .create(&user.id, input)
        .await?;

    Ok(Json(Data::new(workspace)))
}
