use axum::{
    Json,
    extract::{Multipart, State},
};
use axum_extra::{extract::WithRejection, routing::TypedPath};
use serde::Deserialize;

use crate::{
    data::workspaces::{Workspace, WorkspaceId},
    extractors::CurrentUser,
    response::{data::Data, error::ApiError},
    routes::v1::common::FormFields,
    services::UpdateWorkspace,
    state::ServiceState,
};

#[derive(TypedPath, Deserialize, Debug)]
#[typed_path("/workspaces/{workspace_id}")]
pub struct UpdateWorkspacePath {
    pub workspace_id: WorkspaceId,
}

#[utoipa::path(
    patch,
    path = "/workspaces/{workspace_id}",
    tag = "workspaces",
    description = "Rename the workspace or change its image; admins only",
    params(("workspace_id" = String, Path, description = "Workspace id")),
    request_body(content = super::WorkspaceForm, content_type = "multipart/form-data"),
    responses(
        (status = OK, description = "Success", body = Data<Workspace>),
        (status = BAD_REQUEST, description = "Invalid input", body = crate::response::error::ErrorBody),
        (status = UNAUTHORIZED, description = "Not an admin", body = crate::response::error::ErrorBody),
    )
)]
#[tracing::instrument(skip(state, multipart))]
pub async fn update_workspace(
    UpdateWorkspacePath { workspace_id }: UpdateWorkspacePath,
    State(state): State<ServiceState>,
    CurrentUser(user): CurrentUser,
    WithRejection(multipart, _): WithRejection<Multipart, ApiError>,
) -> Result<Json<Data<Workspace>>, ApiError> {
    let form = FormFields::read(multipart).await?;
    let input = UpdateWorkspace {
        name: form.text("name").map(str::to_string),
        image: form.image("image"),
    };

    let workspace = state
        .provider
        .workspace_service()
        .update(&user.id, &workspace_id, input)
        .await?;

    Ok(Json(Data::new(workspace)))
}
