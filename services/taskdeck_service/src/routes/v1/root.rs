use axum::Router;
use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};

use crate::{build, state::ServiceState};

use super::{
    auth::{self, AuthApiDoc},
    members::{self, MembersApiDoc},
    projects::{self, ProjectsApiDoc},
    tasks::{self, TasksApiDoc},
    workspaces::{self, WorkspacesApiDoc},
};

pub fn build_router() -> Router<ServiceState> {
    Router::new()
        .merge(auth::build_router())
        .merge(workspaces::build_router())
        .merge(projects::build_router())
        .merge(tasks::build_router())
        .merge(members::build_router())
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "taskdeck",
        version = build::PKG_VERSION,
        description = build::PKG_DESCRIPTION,
    ),
    security(
        ("session_token" = []),
    ),
    modifiers(&SecurityAddon),
)]
pub struct V1RootApiDoc;

/// The complete v1 document, paths relative to the version root.
pub fn api_doc() -> openapi::OpenApi {
    let mut doc = V1RootApiDoc::openapi();

    doc.merge(AuthApiDoc::openapi());
    doc.merge(WorkspacesApiDoc::openapi());
    doc.merge(ProjectsApiDoc::openapi());
    doc.merge(TasksApiDoc::openapi());
    doc.merge(MembersApiDoc::openapi());

    doc
}

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        openapi
            .components
            .get_or_insert_with(Default::default)
            .add_security_scheme(
                "session_token",
                SecurityScheme::Http(
                    HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build(),
                ),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_doc_lists_every_resource() {
        let doc = api_doc();
        let paths = doc.paths.paths.keys().collect::<Vec<_>>();

        for expected in [
            "/auth/current",
            "/workspaces",
            "/workspaces/{workspace_id}/join",
            "/workspaces/{workspace_id}/analytics",
            "/projects/{project_id}/analytics",
            "/tasks/bulk-update",
            "/members/{member_id}",
        ] {
            assert!(
                paths.iter().any(|path| path.as_str() == expected),
                "missing '{expected}' in {paths:?}"
            );
        }
    }
}
