mod get_current_user;

pub use get_current_user::*;

use axum::Router;
use axum_extra::routing::RouterExt;
use utoipa::OpenApi;

use crate::{data::users::User, response::data::Data, state::ServiceState};

pub fn build_router() -> Router<ServiceState> {
    Router::new().typed_get(get_current_user)
}

#[derive(OpenApi)]
#[openapi(
    paths(get_current_user),
    components(schemas(Data<User>, User)),
    tags((name = "auth", description = "The authenticated user")),
)]
pub struct AuthApiDoc;
