mod entity;
mod query;
mod repository;

pub use entity::*;
pub use query::*;
pub use repository::*;
