use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::routing::{RouterExt, TypedPath};
use serde::Deserialize;
use strum::Display;
use utoipa::openapi::OpenApi;

use crate::{response::yaml::Yaml, routes::v1, state::ServiceState};

pub fn build_router() -> Router<ServiceState> {
    Router::new().typed_get(get_openapi_document)
}

#[derive(TypedPath, Deserialize, Debug)]
#[typed_path("/{version}/{format}")]
pub struct OpenApiDocumentPath {
    version: ApiVersion,
    format: DocumentFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ApiVersion {
    V1,
}

impl ApiVersion {
    /// The document of this version with paths as they are served under
    /// `api_prefix`.
    pub fn document(self, api_prefix: &str) -> OpenApi {
        let mut document = match self {
            ApiVersion::V1 => v1::root::api_doc(),
        };

        let mount = format!("{api_prefix}/{self}");
        document.paths.paths = std::mem::take(&mut document.paths.paths)
            .into_iter()
            .map(|(path, item)| (format!("{mount}{path}"), item))
            .collect();

        document
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    fn render(self, document: OpenApi) -> Response {
        match self {
            DocumentFormat::Json => Json(document).into_response(),
            DocumentFormat::Yaml => Yaml(document).into_response(),
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn get_openapi_document(
    OpenApiDocumentPath { version, format }: OpenApiDocumentPath,
    State(state): State<ServiceState>,
) -> Response {
    format.render(version.document(state.api_prefix()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_paths_follow_mount_point() {
        let document = ApiVersion::V1.document("/service");

        assert!(document.paths.paths.contains_key("/service/v1/tasks"));
        assert!(
            document
                .paths
                .paths
                .keys()
                .all(|path| path.starts_with("/service/v1/"))
        );
    }

    #[test]
    fn test_document_path_renders_lowercase_segments() {
        let path = OpenApiDocumentPath {
            version: ApiVersion::V1,
            format: DocumentFormat::Yaml,
        };

        assert_eq!(path.to_string(), "/v1/yaml");
    }

    #[test]
    fn test_root_mount_has_no_prefix() {
        let document = ApiVersion::V1.document("");

        assert!(document.paths.paths.contains_key("/v1/workspaces"));
    }
}
