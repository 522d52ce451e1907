mod analytics;
mod analytics_impl;
mod error;
mod invite_code;
mod members;
mod members_impl;
mod membership;
mod membership_impl;
mod projects;
mod projects_impl;
mod tasks;
mod tasks_impl;
mod workspaces;
mod workspaces_impl;

#[cfg(test)]
pub(crate) mod test_utils;

pub use analytics::*;
pub use analytics_impl::*;
pub use error::*;
pub use invite_code::*;
pub use members::*;
pub use members_impl::*;
pub use membership::*;
pub use membership_impl::*;
pub use projects::*;
pub use projects_impl::*;
pub use tasks::*;
pub use tasks_impl::*;
pub use workspaces::*;
pub use workspaces_impl::*;

/// Runs the input's `garde` rules and reports the first failures as a
/// validation error.
pub(crate) fn validate_input<T>(input: &T) -> Result<(), ServiceError>
where
    T: garde::Validate,
    T::Context: Default,
{
    input
        .validate()
        .map_err(|report| ServiceError::validation(report.to_string()))
}

/// Trims a user supplied name; the result is validated afterwards.
pub(crate) fn normalize_name(name: &str) -> String {
    name.trim().to_string()
}
