use std::sync::Arc;

use async_trait::async_trait;
use derive_new::new;

use crate::{
    data::users::{User, UserId, UserRepository, UserRepositoryError},
    data_impl::in_memory::data::InMemoryDatabase,
};

#[derive(Debug, Clone, new)]
pub struct InMemoryUserRepository {
    db: Arc<InMemoryDatabase>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get(
        &self,
        id: &UserId,
    ) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.db.read().users.iter().find(|user| user.id == *id).cloned())
    }

    async fn get_many(
        &self,
        ids: &[UserId],
    ) -> Result<Vec<User>, UserRepositoryError> {
        Ok(self
            .db
            .read()
            .users
            .iter()
            .filter(|user| ids.contains(&user.id))
            .cloned()
            .collect())
    }
}
