use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod config;
mod error;
mod output;
mod parser;
mod planner;
mod provider;
mod writer;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing - only show logs with --verbose
    let filter = if cli.verbose {
        EnvFilter::new("bookweaver=debug")
    } else {
        EnvFilter::new("bookweaver=warn")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Plan(args) => cli::plan::execute(args).await,
        Commands::Write(args) => cli::write::execute(args).await,
        Commands::Generate(args) => cli::generate::execute(args).await,
        Commands::Schema => cli::schema::execute(),
    }
}
