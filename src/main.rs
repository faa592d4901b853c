use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod auth;
mod cli;
mod config;
mod http;
mod ledger;
mod phases;
mod richtext;
mod runner;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::RootArgs::parse();

    match cli.command {
        cli::Command::Check(args) => runner::run_check(&args),
        cli::Command::Run(args) => runner::run_run(&args),
        cli::Command::Status(args) => runner::run_status(&args),
    }
}
