use axum::{Json, extract::State};
use axum_extra::{extract::WithRejection, routing::TypedPath};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    data::members::{Member, MemberId, MemberRole},
    extractors::CurrentUser,
    response::{data::Data, error::ApiError},
    state::ServiceState,
};

#[derive(TypedPath, Deserialize, Debug)]
#[typed_path("/members/{member_id}")]
pub struct UpdateMemberPath {
    pub member_id: MemberId,
}

#[derive(Deserialize, Serialize, ToSchema, Debug)]
pub struct UpdateMemberRequest {
    pub role: MemberRole,
}

#[utoipa::path(
    patch,
    path = "/members/{member_id}",
    tag = "members",
    description = "Change a member's role; admins only",
    params(("member_id" = String, Path, description = "Member id")),
    request_body = UpdateMemberRequest,
    responses(
        (status = OK, description = "Success", body = Data<Member>),
        (status = BAD_REQUEST, description = "The member is the only one left", body = crate::response::error::ErrorBody),
        (status = UNAUTHORIZED, description = "Not an admin", body = crate::response::error::ErrorBody),
        (status = NOT_FOUND, description = "Not found", body = crate::response::error::ErrorBody),
    )
)]
#[tracing::instrument(skip(state))]
pub async fn update_member(
    UpdateMemberPath { member_id }: UpdateMemberPath,
    State(state): State<ServiceState>,
    CurrentUser(user): CurrentUser,
    WithRejection(Json(request), _): WithRejection<
        Json<UpdateMemberRequest>,
        ApiError,
    >,
) -> Result<Json<Data<Member>>, ApiError> {
    let member = state
        .provider
        .member_service()
        .update_role(&user.id, &member_id, request.role)
        .await?;

    Ok(Json(Data::new(member)))
}
