use axum::{Json, extract::State};
use axum_extra::routing::TypedPath;
use serde::Deserialize;

use crate::{
    data::members::MemberId,
    extractors::CurrentUser,
    response::{
        data::{Data, Deleted},
        error::ApiError,
    },
    state::ServiceState,
};

#[derive(TypedPath, Deserialize, Debug)]
#[typed_path("/members/{member_id}")]
pub struct DeleteMemberPath {
    pub member_id: MemberId,
}

#[utoipa::path(
    delete,
    path = "/members/{member_id}",
    tag = "members",
    description = "Remove a member; admins may remove anyone, members only themselves",
    params(("member_id" = String, Path, description = "Member id")),
    responses(
        (status = OK, description = "Success", body = Data<Deleted<MemberId>>),
        (status = BAD_REQUEST, description = "The member is the only one left", body = crate::response::error::ErrorBody),
        (status = UNAUTHORIZED, description = "Not allowed", body = crate::response::error::ErrorBody),
        (status = NOT_FOUND, description = "Not found", body = crate::response::error::ErrorBody),
    )
)]
#[tracing::instrument(skip(state))]
pub async fn delete_member(
    DeleteMemberPath { member_id }: DeleteMemberPath,
    State(state): State<ServiceState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Data<Deleted<MemberId>>>, ApiError> {
    let id = state
        .provider
        .member_service()
        .delete(&user.id, &member_id)
        .await?;

    Ok(Json(Data::new(Deleted::new(id))))
}
