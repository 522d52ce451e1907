pub mod args;
pub mod build;
pub mod clock;
pub mod config;
pub mod data;
pub mod data_impl;
pub mod extractors;
pub mod providers;
pub mod response;
pub mod routes;
pub mod security;
pub mod services;
pub mod state;

mod init_tracing;

use axum::Router;
use tokio::net::TcpListener;

use crate::{
    args::{Cli, CliSubcommands, ServeArgs},
    config::Configuration,
    init_tracing::init_tracing,
    state::ServiceState,
};

pub async fn run(cli: Cli) -> eyre::Result<()> {
    match cli.subcommand {
        CliSubcommands::Serve(command) => serve(command.args).await,
        CliSubcommands::ConfigSchema => {
            let schema = schemars::schema_for!(Configuration);
            println!("{}", serde_json::to_string_pretty(&schema)?);
            Ok(())
        }
    }
}

/// The complete HTTP application for `state`.
pub fn app(state: ServiceState) -> Router {
    routes::root::build_router(&state.routes).with_state(state)
}

async fn serve(args: ServeArgs) -> eyre::Result<()> {
    init_tracing(&args)?;

    let state = ServiceState::from_args(&args)?;
    let router = app(state);

    let socket = TcpListener::bind(&args.listen).await?;

    tracing::info!(
        listen = %args.listen,
        api_prefix = args.routes.api_prefix(),
        "{} {} started",
        build::PROJECT_NAME,
        build::PKG_VERSION
    );

    axum::serve(socket, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }

    tracing::info!("shutting down");
}
