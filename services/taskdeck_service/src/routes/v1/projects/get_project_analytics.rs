use axum::{Json, extract::State};
use axum_extra::routing::TypedPath;
use serde::Deserialize;

use crate::{
    data::projects::ProjectId,
    extractors::CurrentUser,
    response::{data::Data, error::ApiError},
    services::Analytics,
    state::ServiceState,
};

#[derive(TypedPath, Deserialize, Debug)]
#[typed_path("/projects/{project_id}/analytics")]
pub struct GetProjectAnalyticsPath {
    pub project_id: ProjectId,
}

#[utoipa::path(
    get,
    path = "/projects/{project_id}/analytics",
    tag = "projects",
    description = "Task counts for this month and their change since last month",
    params(("project_id" = String, Path, description = "Project id")),
    responses(
        (status = OK, description = "Success", body = Data<Analytics>),
        (status = UNAUTHORIZED, description = "Not a member", body = crate::response::error::ErrorBody),
        (status = NOT_FOUND, description = "Not found", body = crate::response::error::ErrorBody),
    )
)]
#[tracing::instrument(skip(state))]
pub async fn get_project_analytics(
    GetProjectAnalyticsPath { project_id }: GetProjectAnalyticsPath,
    State(state): State<ServiceState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Data<Analytics>>, ApiError> {
    let analytics = state
        .provider
        .analytics_service()
        .project_analytics(&user.id, &project_id)
        .await?;

    Ok(Json(Data::new(analytics)))
}
