use axum::{
    Json,
    extract::{Query, State},
};
use axum_extra::{extract::WithRejection, routing::TypedPath};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    data::workspaces::WorkspaceId,
    extractors::CurrentUser,
    response::{
        data::{Data, Documents},
        error::ApiError,
    },
    services::PopulatedMember,
    state::ServiceState,
};

#[derive(TypedPath, Deserialize, Debug)]
#[typed_path("/members")]
pub struct ListMembersPath;

#[derive(Deserialize, IntoParams, Debug)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct ListMembersQuery {
    pub workspace_id: WorkspaceId,
}

#[utoipa::path(
    get,
    path = "/members",
    tag = "members",
    description = "Members of a workspace with their names and emails",
    params(ListMembersQuery),
    responses(
        (status = OK, description = "Success", body = Data<Documents<PopulatedMember>>),
        (status = UNAUTHORIZED, description = "Not a member", body = crate::response::error::ErrorBody),
    )
)]
#[tracing::instrument(skip(state))]
pub async fn list_members(
    _: ListMembersPath,
    State(state): State<ServiceState>,
    CurrentUser(user): CurrentUser,
    WithRejection(Query(query), _): WithRejection<
        Query<ListMembersQuery>,
        ApiError,
    >,
) -> Result<Json<Data<Documents<PopulatedMember>>>, ApiError> {
    let members = state
        .provider
        .member_service()
        .list(&user.id, &query.workspace_id)
        .await?;

    Ok(Json(Data::new(members.into())))
}
