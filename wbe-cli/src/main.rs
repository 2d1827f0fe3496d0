//! WBE CLI - Command line tool for fetching World Bank indicator data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "wbe-cli",
    version,
    about = "World Bank indicator data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: wbe_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    wbe_cmd::run(cli.command).await
}
