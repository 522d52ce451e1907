mod config;
mod trace_level;

pub use config::*;
pub use trace_level::*;

use std::fs::{self, File};
use std::sync::Arc;

use eyre::OptionExt as _;
use tracing_core::{LevelFilter, Subscriber};
use tracing_subscriber::{
    Layer, Registry, filter::Targets, layer::SubscriberExt as _,
};

pub type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

pub type BoxedSubscriber = Box<dyn Subscriber + Send + Sync + 'static>;

/// A subscriber that drops every event.
pub fn noop_subscriber() -> BoxedSubscriber {
    Box::new(Registry::default())
}

pub fn build_subscriber(
    config: &TracingConfig,
) -> eyre::Result<BoxedSubscriber> {
    let layers = build_layers(config)?;

    Ok(Box::new(Registry::default().with(layers)))
}

/// Builds the subscriber and installs it as the process-wide default.
pub fn init(config: &TracingConfig) -> eyre::Result<()> {
    let subscriber = build_subscriber(config)?;

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

fn base_filters() -> Targets {
    Targets::new()
        .with_target("hyper", LevelFilter::WARN)
        .with_target("hyper_util", LevelFilter::WARN)
        .with_target("h2", LevelFilter::OFF)
}

fn build_layers(config: &TracingConfig) -> eyre::Result<Vec<BoxedLayer>> {
    let mut layers = Vec::new();
    let filters = base_filters();

    if !config.stdout_trace_level.is_off() {
        let filter = filters
            .clone()
            .with_default(LevelFilter::from(config.stdout_trace_level));
        let ansi = atty::is(atty::Stream::Stdout);

        let layer = match config.stdout_format {
            OutputFormat::Pretty => tracing_subscriber::fmt::layer()
                .pretty()
                .with_writer(std::io::stdout)
                .with_ansi(ansi)
                .with_file(false)
                .with_line_number(false)
                .with_filter(filter)
                .boxed(),
            OutputFormat::Compact => tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stdout)
                .with_ansi(ansi)
                .with_filter(filter)
                .boxed(),
            OutputFormat::Json => tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stdout)
                .with_filter(filter)
                .boxed(),
        };

        layers.push(layer);
    }

    if config.stderr_trace_enabled {
        let layer = tracing_subscriber::fmt::layer()
            .with_ansi(atty::is(atty::Stream::Stderr))
            .with_writer(std::io::stderr)
            .with_filter(filters.clone().with_default(LevelFilter::ERROR))
            .boxed();

        layers.push(layer);
    }

    if !config.file_trace_level.is_off() {
        let file_path = config
            .file_path
            .as_ref()
            .ok_or_eyre("file path for file trace not set")?;

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let layer = tracing_subscriber::fmt::layer()
            .json()
            .with_ansi(false)
            .with_writer(Arc::new(File::create(file_path)?))
            .with_filter(
                filters
                    .clone()
                    .with_default(LevelFilter::from(config.file_trace_level)),
            )
            .boxed();

        layers.push(layer);
    }

    Ok(layers)
}
