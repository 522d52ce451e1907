use axum::response::IntoResponse;
use axum_extra::response::InternalServerError;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct Yaml<T>(pub T);

impl<T: Serialize> IntoResponse for Yaml<T> {
    fn into_response(self) -> axum::response::Response {
        match serde_norway::to_string(&self.0) {
            Ok(yaml) => (
                http::StatusCode::OK,
                [(http::header::CONTENT_TYPE, "application/yaml")],
                Bytes::from(yaml),
            )
                .into_response(),
            Err(e) => InternalServerError(e).into_response(),
        }
    }
}
