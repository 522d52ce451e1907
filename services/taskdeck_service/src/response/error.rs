use axum::{
    Json,
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::{JsonRejection, QueryRejection},
    },
    response::{IntoResponse, Response},
};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    security::SessionServiceError,
    services::{ServiceError, ServiceErrorKind},
};

const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// Failure envelope: `{ "error": "..." }`.
#[derive(Deserialize, Serialize, ToSchema, Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

/// Error returned by every handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn unauthorized() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "Unauthorized")
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Logs `cause` and hides it from the caller.
    pub fn internal(cause: &dyn std::fmt::Display) -> Self {
        tracing::error!("request failed: {cause}");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(error: ServiceError) -> Self {
        match error.kind() {
            ServiceErrorKind::Unauthorized => Self::unauthorized(),
            ServiceErrorKind::NotFound => {
                Self::new(StatusCode::NOT_FOUND, error.public_message())
            }
            ServiceErrorKind::Validation
            | ServiceErrorKind::AlreadyMember
            | ServiceErrorKind::InvalidInviteCode
            | ServiceErrorKind::LastMember => {
                Self::bad_request(error.public_message())
            }
            ServiceErrorKind::Custom
            | ServiceErrorKind::UserRepository
            | ServiceErrorKind::WorkspaceRepository
            | ServiceErrorKind::MemberRepository
            | ServiceErrorKind::ProjectRepository
            | ServiceErrorKind::TaskRepository => Self::internal(&error),
        }
    }
}

impl From<SessionServiceError> for ApiError {
    fn from(error: SessionServiceError) -> Self {
        Self::internal(&error)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl From<MultipartError> for ApiError {
    fn from(error: MultipartError) -> Self {
        Self::new(error.status(), error.body_text())
    }
}
