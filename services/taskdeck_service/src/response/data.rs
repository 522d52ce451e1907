use derive_new::new;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Success envelope: `{ "data": ... }`.
#[derive(
    Deserialize, Serialize, new, ToSchema, Debug, Clone, PartialEq, Eq, Hash,
)]
pub struct Data<T> {
    pub data: T,
}

impl<T: Serialize> From<T> for Data<T> {
    #[inline(always)]
    fn from(data: T) -> Self {
        Self::new(data)
    }
}

/// A list together with its length.
#[derive(Deserialize, Serialize, ToSchema, Debug, Clone, PartialEq, Eq)]
pub struct Documents<T> {
    pub documents: Vec<T>,
    pub total: usize,
}

impl<T> From<Vec<T>> for Documents<T> {
    fn from(documents: Vec<T>) -> Self {
        Self {
            total: documents.len(),
            documents,
        }
    }
}

/// Payload of delete endpoints.
#[derive(Deserialize, Serialize, new, ToSchema, Debug, Clone, PartialEq, Eq)]
pub struct Deleted<I> {
    pub id: I,
}
