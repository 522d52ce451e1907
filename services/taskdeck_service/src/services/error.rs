use strum::{EnumDiscriminants, IntoDiscriminant};

use crate::data::{
    members::MemberRepositoryError, projects::ProjectRepositoryError,
    tasks::TaskRepositoryError, users::UserRepositoryError,
    workspaces::WorkspaceRepositoryError,
};

#[derive(Debug, thiserror::Error)]
#[error("service error: {inner}")]
pub struct ServiceError {
    inner: ServiceErrorInner,
    kind: ServiceErrorKind,
}

impl ServiceError {
    pub fn kind(&self) -> ServiceErrorKind {
        self.kind
    }

    pub fn unauthorized() -> Self {
        ServiceErrorInner::Unauthorized.into()
    }

    pub fn not_found(entity: &'static str) -> Self {
        ServiceErrorInner::NotFound(entity).into()
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ServiceErrorInner::Validation(message.into()).into()
    }

    pub fn custom(error: impl Into<eyre::Report>) -> Self {
        ServiceErrorInner::Custom(error.into()).into()
    }

    /// The message safe to show to the caller.
    pub fn public_message(&self) -> String {
        match &self.inner {
            ServiceErrorInner::Validation(message) => message.clone(),
            ServiceErrorInner::NotFound(entity) => {
                format!("{entity} not found")
            }
            other => other.to_string(),
        }
    }
}

impl<T: Into<ServiceErrorInner>> From<T> for ServiceError {
    fn from(inner: T) -> Self {
        let inner = inner.into();
        Self {
            kind: inner.discriminant(),
            inner,
        }
    }
}

#[derive(Debug, EnumDiscriminants, thiserror::Error)]
#[strum_discriminants(vis(pub), name(ServiceErrorKind))]
pub enum ServiceErrorInner {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Validation(String),

    #[error("Already a Member")]
    AlreadyMember,

    #[error("Invalid Invite Code")]
    InvalidInviteCode,

    #[error("Cannot remove or downgrade the only member of a workspace")]
    LastMember,

    #[error(transparent)]
    Custom(#[from] eyre::Report),

    #[error(transparent)]
    UserRepository(#[from] UserRepositoryError),

    #[error(transparent)]
    WorkspaceRepository(#[from] WorkspaceRepositoryError),

    #[error(transparent)]
    MemberRepository(#[from] MemberRepositoryError),

    #[error(transparent)]
    ProjectRepository(#[from] ProjectRepositoryError),

    #[error(transparent)]
    TaskRepository(#[from] TaskRepositoryError),
}
