use async_trait::async_trait;
use derive_new::new;
use strum::{EnumDiscriminants, IntoDiscriminant as _};

use crate::data::users::{User, UserRepositoryError};

/// Resolves a bearer token to the user it was issued for.
#[async_trait]
pub trait SessionService: Send + Sync + 'static {
    /// `None` for unknown, disabled and expired sessions.
    async fn authenticate(
        &self,
        token: &str,
    ) -> Result<Option<User>, SessionServiceError>;
}

pub type DynSessionService = Box<dyn SessionService>;

#[derive(Debug, thiserror::Error, new)]
#[error("session service error: {inner}")]
pub struct SessionServiceError {
    kind: SessionServiceErrorKind,
    inner: SessionServiceErrorInner,
}

impl SessionServiceError {
    #[allow(unused)]
    pub fn custom(inner: impl Into<eyre::Report>) -> Self {
        SessionServiceErrorInner::Custom(inner.into()).into()
    }

    #[allow(unused)]
    pub fn kind(&self) -> SessionServiceErrorKind {
        self.kind
    }
}

impl<T: Into<SessionServiceErrorInner>> From<T> for SessionServiceError {
    fn from(inner: T) -> Self {
        let inner = inner.into();
        Self {
            kind: inner.discriminant(),
            inner,
        }
    }
}

#[derive(Debug, thiserror::Error, EnumDiscriminants)]
#[strum_discriminants(vis(pub), name(SessionServiceErrorKind))]
pub enum SessionServiceErrorInner {
    #[error(transparent)]
    Custom(#[from] eyre::Report),

    #[error(transparent)]
    UserRepository(#[from] UserRepositoryError),
}
