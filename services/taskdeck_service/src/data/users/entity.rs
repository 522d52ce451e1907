use derive_new::new;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::data::id::entity_id;

entity_id!(UserId);

#[derive(
    Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, new, ToSchema,
)]
pub struct User {
    pub id: UserId,
    #[new(into)]
    pub name: String,
    #[new(into)]
    pub email: String,
}
