use axum::{
    Json,
    extract::{Query, State},
};
use axum_extra::{extract::WithRejection, routing::TypedPath};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    data::{projects::Project, workspaces::WorkspaceId},
    extractors::CurrentUser,
    response::{
        data::{Data, Documents},
        error::ApiError,
    },
    state::ServiceState,
};

#[derive(TypedPath, Deserialize, Debug)]
#[typed_path("/projects")]
pub struct ListProjectsPath;

#[derive(Deserialize, IntoParams, Debug)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct ListProjectsQuery {
    /// The workspace to list projects of
    pub workspace_id: WorkspaceId,
}

#[utoipa::path(
    get,
    path = "/projects",
    tag = "projects",
    description = "Projects of a workspace, newest first",
    params(ListProjectsQuery),
    responses(
        (status = OK, description = "Success", body = Data<Documents<Project>>),
        (status = UNAUTHORIZED, description = "Not a member", body = crate::response::error::ErrorBody),
    )
)]
#[tracing::instrument(skip(state))]
pub async fn list_projects(
    _: ListProjectsPath,
    State(state): State<ServiceState>,
    CurrentUser(user): CurrentUser,
    WithRejection(Query(query), _): WithRejection<
        Query<ListProjectsQuery>,
        ApiError,
    >,
) -> Result<Json<Data<Documents<Project>>>, ApiError> {
    let projects = state
        .provider
        .project_service()
        .list(&user.id, &query.workspace_id)
        .await?;

    Ok(Json(Data::new(projects.into())))
}
