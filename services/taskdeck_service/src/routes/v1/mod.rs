mod common;

pub mod auth;
pub mod members;
pub mod projects;
pub mod root;
pub mod tasks;
pub mod workspaces;
