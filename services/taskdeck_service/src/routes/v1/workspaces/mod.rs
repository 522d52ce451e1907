mod create_workspace;
mod delete_workspace;
mod get_workspace;
mod get_workspace_analytics;
mod get_workspace_info;
mod join_workspace;
mod list_workspaces;
mod reset_invite_code;
mod update_workspace;

pub use create_workspace::*;
pub use delete_workspace::*;
pub use get_workspace::*;
pub use get_workspace_analytics::*;
pub use get_workspace_info::*;
pub use join_workspace::*;
pub use list_workspaces::*;
pub use reset_invite_code::*;
pub use update_workspace::*;

use axum::Router;
use axum_extra::routing::RouterExt;
use utoipa::OpenApi;

use crate::{
    data::workspaces::{Workspace, WorkspaceId, WorkspaceInfo},
    response::{
        data::{Data, Deleted, Documents},
        error::ErrorBody,
    },
    services::Analytics,
    state::ServiceState,
};

pub fn build_router() -> Router<ServiceState> {
    Router::new()
        .typed_get(list_workspaces)
        .typed_post(create_workspace)
        .typed_get(get_workspace)
        .typed_patch(update_workspace)
        .typed_delete(delete_workspace)
        .typed_get(get_workspace_info)
        .typed_post(reset_invite_code)
        .typed_post(join_workspace)
        .typed_get(get_workspace_analytics)
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list_workspaces,
        create_workspace,
        get_workspace,
        update_workspace,
        delete_workspace,
        get_workspace_info,
        reset_invite_code,
        join_workspace,
        get_workspace_analytics,
    ),
    components(
        schemas(
            Data<Documents<Workspace>>,
            Data<Workspace>,
            Data<WorkspaceInfo>,
            Data<Deleted<WorkspaceId>>,
            Data<Analytics>,
            JoinWorkspaceRequest,
            WorkspaceForm,
            ErrorBody,
        )
    ),
    tags((name = "workspaces", description = "Workspaces and invitations")),
)]
pub struct WorkspacesApiDoc;

/// Documents the multipart body of create and update.
#[allow(unused)]
#[derive(utoipa::ToSchema)]
pub struct WorkspaceForm {
    name: Option<String>,
    /// An uploaded file, or a URL. An empty value clears the image.
    #[schema(format = Binary)]
    image: Option<String>,
}
