use axum::Json;
use axum_extra::routing::TypedPath;
use serde::Deserialize;

use crate::{
    data::users::User, extractors::CurrentUser, response::data::Data,
};

#[derive(TypedPath, Deserialize, Debug)]
#[typed_path("/auth/current")]
pub struct CurrentUserPath;

#[utoipa::path(
    get,
    path = "/auth/current",
    tag = "auth",
    description = "The user owning the session token",
    responses(
        (status = OK, description = "Success", body = Data<User>),
        (status = UNAUTHORIZED, description = "Missing or invalid session", body = crate::response::error::ErrorBody),
    )
)]
#[tracing::instrument]
pub async fn get_current_user(
    _: CurrentUserPath,
    CurrentUser(user): CurrentUser,
) -> Json<Data<User>> {
    Json(Data::new(user))
}
