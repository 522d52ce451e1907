mod id;

pub mod members;
pub mod projects;
pub mod tasks;
pub mod users;
pub mod workspaces;
