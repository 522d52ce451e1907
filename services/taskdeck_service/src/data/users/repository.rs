use async_trait::async_trait;
use strum::{EnumDiscriminants, IntoDiscriminant};

use crate::data::users::{User, UserId};

#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    async fn get(
        &self,
        id: &UserId,
    ) -> Result<Option<User>, UserRepositoryError>;

    async fn get_many(
        &self,
        ids: &[UserId],
    ) -> Result<Vec<User>, UserRepositoryError>;
}

pub type DynUserRepository = Box<dyn UserRepository>;

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct UserRepositoryError(pub(crate) UserRepositoryErrorInner);

impl UserRepositoryError {
    #[allow(unused)]
    pub fn kind(&self) -> UserRepositoryErrorKind {
        self.0.discriminant()
    }
}

impl<T: Into<UserRepositoryErrorInner>> From<T> for UserRepositoryError {
    fn from(inner: T) -> Self {
        Self(inner.into())
    }
}

#[derive(Debug, EnumDiscriminants, thiserror::Error)]
#[strum_discriminants(vis(pub), name(UserRepositoryErrorKind))]
pub enum UserRepositoryErrorInner {
    #[error(transparent)]
    Custom(#[from] eyre::Report),
}
