use std::sync::Arc;

use derive_new::new;

use crate::{
    args::{ConfigType, ServeArgs},
    clock::SystemClock,
    config::Configuration,
    providers::{DependencyProvider, InMemoryDependencyProvider},
    routes::root::RouterConfig,
};

#[derive(new, Clone)]
pub struct ServiceState {
    pub provider: Arc<dyn DependencyProvider>,
    pub routes: Arc<RouterConfig>,
}

impl ServiceState {
    pub fn from_args(args: &ServeArgs) -> eyre::Result<Self> {
        let config = load_configuration(args)?;

        let provider = InMemoryDependencyProvider::new(
            Arc::new(config.to_in_memory_database()),
            Arc::new(config.security.sessions.clone()),
            Arc::new(SystemClock),
            config.invite_code_length,
        );

        Ok(Self {
            provider: Arc::new(provider),
            routes: Arc::new(args.routes.clone()),
        })
    }

    pub fn api_prefix(&self) -> &str {
        self.routes.api_prefix()
    }
}

fn load_configuration(args: &ServeArgs) -> eyre::Result<Configuration> {
    let Some(config) = &args.config else {
        tracing::warn!(
            "no configuration provided, no session will be able to authenticate"
        );
        return Ok(Configuration::default());
    };

    let config = match args.config_type.unwrap_or_default() {
        ConfigType::File => Configuration::from_file(config)?,
        ConfigType::Inline => Configuration::from_inline(config)?,
    };

    tracing::info!(
        users = config.users.len(),
        sessions = config.security.sessions.len(),
        "loaded configuration"
    );

    Ok(config)
}
