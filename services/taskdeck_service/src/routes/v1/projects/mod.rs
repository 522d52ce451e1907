mod create_project;
mod delete_project;
mod get_project;
mod get_project_analytics;
mod list_projects;
mod update_project;

pub use create_project::*;
pub use delete_project::*;
pub use get_project::*;
pub use get_project_analytics::*;
pub use list_projects::*;
pub use update_project::*;

use axum::Router;
use axum_extra::routing::RouterExt;
use utoipa::OpenApi;

use crate::{
    data::projects::{Project, ProjectId},
    response::{
        data::{Data, Deleted, Documents},
        error::ErrorBody,
    },
    services::Analytics,
    state::ServiceState,
};

pub fn build_router() -> Router<ServiceState> {
    Router::new()
        .typed_get(list_projects)
        .typed_post(create_project)
        .typed_get(get_project)
        .typed_patch(update_project)
        .typed_delete(delete_project)
        .typed_get(get_project_analytics)
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list_projects,
        create_project,
        get_project,
        update_project,
        delete_project,
        get_project_analytics,
    ),
    components(
        schemas(
            Data<Documents<Project>>,
            Data<Project>,
            Data<Deleted<ProjectId>>,
            Data<Analytics>,
            ProjectForm,
            ErrorBody,
        )
    ),
    tags((name = "projects", description = "Projects within a workspace")),
)]
pub struct ProjectsApiDoc;

/// Documents the multipart body of create and update.
#[allow(unused)]
#[derive(utoipa::ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ProjectForm {
    /// Required on create.
    workspace_id: Option<String>,
    name: Option<String>,
    /// An uploaded file, or a URL. An empty value clears the image.
    #[schema(format = Binary)]
    image: Option<String>,
}
