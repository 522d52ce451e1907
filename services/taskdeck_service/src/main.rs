use clap::Parser as _;
use taskdeck_service::args::Cli;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> eyre::Result<()> {
    taskdeck_service::run(Cli::parse()).await
}
