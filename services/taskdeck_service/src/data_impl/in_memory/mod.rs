mod data;
mod member_repository;
mod project_repository;
mod task_repository;
mod user_repository;
mod workspace_repository;

pub use data::*;
pub use member_repository::*;
pub use project_repository::*;
pub use task_repository::*;
pub use user_repository::*;
pub use workspace_repository::*;
