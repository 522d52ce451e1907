use axum::{Json, extract::State};
use axum_extra::routing::TypedPath;
use serde::Deserialize;

use crate::{
    data::workspaces::WorkspaceId,
    extractors::CurrentUser,
    response::{data::Data, error::ApiError},
    services::Analytics,
    state::ServiceState,
};

#[derive(TypedPath, Deserialize, Debug)]
#[typed_path("/workspaces/{workspace_id}/analytics")]
pub struct GetWorkspaceAnalyticsPath {
    pub workspace_id: WorkspaceId,
}

#[utoipa::path(
    get,
    path = "/workspaces/{workspace_id}/analytics",
    tag = "workspaces",
    description = "Task counts for this month and their change since last month",
    params(("workspace_id" = String, Path, description = "Workspace id")),
    responses(
        (status = OK, description = "Success", body = Data<Analytics>),
        (status = UNAUTHORIZED, description = "Not a member", body = crate::response::error::ErrorBody),
    )
)]
#[tracing::instrument(skip(state))]
pub async fn get_workspace_analytics(
    GetWorkspaceAnalyticsPath { workspace_id }: GetWorkspaceAnalyticsPath,
    State(state): State<ServiceState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Data<Analytics>>, ApiError> {
    let analytics = state
        .provider
        .analytics_service()
        .workspace_analytics(&user.id, &workspace_id)
        .await?;

    Ok(Json(Data::new(analytics)))
}
