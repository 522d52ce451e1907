pub const PROJECT_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
