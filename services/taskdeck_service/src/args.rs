use derive_new::new;
use strum::Display;
use taskdeck_tracing_subscriber::TraceLevel;

use crate::routes::root::RouterConfig;

#[derive(clap::Parser)]
#[command(name = "taskdeck", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub subcommand: CliSubcommands,
}

#[derive(clap::Subcommand, Debug, Clone)]
pub enum CliSubcommands {
    /// Start the HTTP service.
    Serve(#[command(flatten)] ServeCommand),

    /// Print the JSON schema of the configuration file.
    ConfigSchema,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ServeCommand {
    #[command(flatten)]
    pub args: ServeArgs,
}

#[derive(clap::Args, Clone, Debug, new)]
pub struct ServeArgs {
    #[clap(
        long,
        short,
        default_value = "0.0.0.0:3000",
        env = "TASKDECK_LISTEN",
        help = "The address to listen on"
    )]
    pub listen: String,

    #[clap(
        long,
        short,
        env = "TASKDECK_CONFIG",
        help = "Config file path, or inline JSON with --config-type inline"
    )]
    pub config: Option<String>,

    #[clap(
        long,
        value_enum,
        env = "TASKDECK_CONFIG_TYPE",
        help = "How to interpret --config"
    )]
    pub config_type: Option<ConfigType>,

    #[command(flatten)]
    pub routes: RouterConfig,

    #[clap(
        long,
        default_value = "info",
        env = "TASKDECK_TRACE_LEVEL",
        help = "Trace level for stdout"
    )]
    pub trace_level: TraceLevel,

    #[clap(
        long,
        env = "TASKDECK_TRACE_FILE",
        help = "Write JSON traces to this file"
    )]
    pub trace_file: Option<String>,
}

#[derive(
    clap::ValueEnum,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    Default,
)]
pub enum ConfigType {
    #[default]
    #[strum(serialize = "file")]
    File,
    #[strum(serialize = "inline")]
    Inline,
}
