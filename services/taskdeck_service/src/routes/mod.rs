pub mod open_api;
pub mod root;
pub mod v1;
