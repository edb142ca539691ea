//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about = "Merit-order production plan service", propagate_version = true)]
pub struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true, env = "PRODUCTION_PLAN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the REST API server.
    #[cfg(feature = "api")]
    Serve(ServeArgs),

    /// Compute the plan for a payload file and print it as JSON.
    Solve(SolveArgs),
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Interface address to bind, overrides `server.host`.
    #[arg(long)]
    pub host: Option<String>,

    /// TCP port, overrides `server.port`.
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Debug, Args)]
pub struct SolveArgs {
    /// JSON payload file.
    pub payload: PathBuf,

    /// Also write the plan as CSV to this path.
    #[arg(long)]
    pub csv_out: Option<PathBuf>,
}
