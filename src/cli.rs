//! CLI argument parsing for the seeding workflow.
//!
//! The CLI is intentionally thin: it wires the sequential seeding loop without
//! embedding policy, so the same core logic stays testable in isolation.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Root CLI entrypoint for the seeding workflow.
///
/// Keeping a single `RootArgs` type makes command routing obvious and avoids
/// hidden defaults in subcommand constructors.
#[derive(Parser, Debug)]
#[command(
    name = "strapi-seed",
    version,
    about = "Phased content seeding for a bilingual Strapi CMS",
    after_help = "Commands:\n  check               Wait for the CMS and verify credentials\n  run                 Execute the seeding phases against the CMS\n  status              Summarize the local seed ledger\n\nExamples:\n  strapi-seed check\n  strapi-seed run\n  strapi-seed run --phase foundation --phase pages\n  strapi-seed status --json\n\nConfiguration is read from STRAPI_URL, STRAPI_API_TOKEN, ADMIN_EMAIL,\nand ADMIN_PASSWORD; flags take precedence where both are given.",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level workflow commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    Check(CheckArgs),
    Run(RunArgs),
    Status(StatusArgs),
}

/// Check command inputs for verifying connectivity and credentials.
#[derive(Parser, Debug)]
#[command(about = "Wait for the CMS and verify credentials")]
pub struct CheckArgs {
    /// Base URL of the CMS (default: STRAPI_URL, then http://localhost:1337)
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Number of reachability probes before giving up
    #[arg(long, value_name = "N", default_value_t = 30)]
    pub wait_attempts: u32,

    /// Seconds between reachability probes
    #[arg(long, value_name = "SECS", default_value_t = 5)]
    pub wait_interval_secs: u64,

    /// Emit a verbose transcript of the workflow
    #[arg(long)]
    pub verbose: bool,
}

/// Run command inputs for executing the seeding phases.
#[derive(Parser, Debug)]
#[command(about = "Execute the seeding phases against the CMS")]
pub struct RunArgs {
    /// Base URL of the CMS (default: STRAPI_URL, then http://localhost:1337)
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Path to the seed ledger file
    #[arg(long, value_name = "PATH")]
    pub ledger: Option<PathBuf>,

    /// Phase to run, by number or name; repeatable (default: all phases)
    #[arg(long = "phase", value_name = "PHASE")]
    pub phase: Vec<String>,

    /// Seconds to pause between phases so the CMS can settle
    #[arg(long, value_name = "SECS", default_value_t = 2)]
    pub phase_delay_secs: u64,

    /// Number of reachability probes before giving up
    #[arg(long, value_name = "N", default_value_t = 30)]
    pub wait_attempts: u32,

    /// Seconds between reachability probes
    #[arg(long, value_name = "SECS", default_value_t = 5)]
    pub wait_interval_secs: u64,

    /// Emit a verbose transcript of the workflow
    #[arg(long)]
    pub verbose: bool,
}

/// Status command inputs for summarizing the local ledger.
#[derive(Parser, Debug)]
#[command(about = "Summarize the local seed ledger")]
pub struct StatusArgs {
    /// Path to the seed ledger file
    #[arg(long, value_name = "PATH")]
    pub ledger: Option<PathBuf>,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}
