mod delete_member;
mod list_members;
mod update_member;

pub use delete_member::*;
pub use list_members::*;
pub use update_member::*;

use axum::Router;
use axum_extra::routing::RouterExt;
use utoipa::OpenApi;

use crate::{
    data::members::{Member, MemberId, MemberRole},
    response::{
        data::{Data, Deleted, Documents},
        error::ErrorBody,
    },
    services::PopulatedMember,
    state::ServiceState,
};

pub fn build_router() -> Router<ServiceState> {
    Router::new()
        .typed_get(list_members)
        .typed_patch(update_member)
        .typed_delete(delete_member)
}

#[derive(OpenApi)]
#[openapi(
    paths(list_members, update_member, delete_member),
    components(
        schemas(
            Data<Documents<PopulatedMember>>,
            Data<Member>,
            Data<Deleted<MemberId>>,
            UpdateMemberRequest,
            MemberRole,
            ErrorBody,
        )
    ),
    tags((name = "members", description = "Workspace membership")),
)]
pub struct MembersApiDoc;
