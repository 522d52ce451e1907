use axum::Router;
use derive_new::new;
use http::StatusCode;

use crate::{
    response::error::ApiError,
    routes::{open_api, v1},
    state::ServiceState,
};

pub const DEFAULT_API_PREFIX: &str = "/api";

#[derive(clap::Args, Debug, Clone, Default, PartialEq, Eq, new)]
pub struct RouterConfig {
    #[clap(
        long,
        env = "TASKDECK_API_PREFIX",
        help = "Prefix for the API routes [default: /api]"
    )]
    pub api_prefix: Option<String>,

    #[clap(
        long,
        env = "TASKDECK_DISABLE_OPENAPI",
        help = "Do not serve the OpenAPI documents"
    )]
    pub disable_openapi: bool,
}

impl RouterConfig {
    /// The configured prefix without a trailing slash; empty when the API
    /// is mounted at the root.
    pub fn api_prefix(&self) -> &str {
        self.api_prefix
            .as_deref()
            .unwrap_or(DEFAULT_API_PREFIX)
            .trim_end_matches('/')
    }
}

pub fn build_router(config: &RouterConfig) -> Router<ServiceState> {
    let api = Router::new().nest("/v1", v1::root::build_router());

    let prefix = config.api_prefix();
    let mut router = if prefix.is_empty() {
        api
    } else if prefix.starts_with('/') {
        Router::new().nest(prefix, api)
    } else {
        Router::new().nest(&format!("/{prefix}"), api)
    };

    if !config.disable_openapi {
        router = router.nest("/openapi", open_api::build_router());
    }

    router.fallback(not_found)
}

async fn not_found() -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, "Not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_prefix_defaults_and_trims() {
        assert_eq!(RouterConfig::default().api_prefix(), "/api");
        assert_eq!(
            RouterConfig::new(Some("/service/".to_string()), false)
                .api_prefix(),
            "/service"
        );
        assert_eq!(
            RouterConfig::new(Some("/".to_string()), false).api_prefix(),
            ""
        );
    }
}
