//! Production plan entry point: CLI wiring and config-driven startup.

use std::fs;
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

use production_plan::cli::{Cli, Command, SolveArgs};
use production_plan::config::ServiceConfig;
use production_plan::io::export::export_csv;
use production_plan::logging;
use production_plan::plan::{self, Payload, PlanSummary};

fn load_config(path: Option<&Path>) -> Result<ServiceConfig> {
    match path {
        Some(path) => Ok(ServiceConfig::from_toml_file(path)?),
        None => Ok(ServiceConfig::default()),
    }
}

/// Validates, solves, and prints the plan for a payload file.
fn solve(config: &ServiceConfig, args: &SolveArgs) -> Result<()> {
    let raw = fs::read_to_string(&args.payload)
        .with_context(|| format!("cannot read payload \"{}\"", args.payload.display()))?;
    let payload: Payload = serde_json::from_str(&raw)
        .with_context(|| format!("invalid payload \"{}\"", args.payload.display()))?;

    let plan = plan::solve(&payload)?;
    let decimals = config.plan.decimals;

    println!("{}", serde_json::to_string_pretty(&plan.rounded(decimals))?);
    eprintln!("{}", PlanSummary::from_plan(&payload, &plan));

    if let Some(ref path) = args.csv_out {
        export_csv(&plan, decimals, path)
            .with_context(|| format!("failed to write CSV \"{}\"", path.display()))?;
        eprintln!("Plan written to {}", path.display());
    }
    Ok(())
}

#[cfg(feature = "api")]
fn serve(config: &ServiceConfig, args: &production_plan::cli::ServeArgs) -> Result<()> {
    use std::net::{IpAddr, SocketAddr};
    use std::sync::Arc;

    use production_plan::api::{self, AppState};

    let host = args.host.as_deref().unwrap_or(&config.server.host);
    let ip: IpAddr = host
        .parse()
        .with_context(|| format!("invalid host \"{host}\""))?;
    let addr = SocketAddr::new(ip, args.port.unwrap_or(config.server.port));

    let state = Arc::new(AppState {
        decimals: config.plan.decimals,
    });
    let rt = tokio::runtime::Runtime::new().context("failed to create tokio runtime")?;
    rt.block_on(api::serve(state, addr))
        .with_context(|| format!("server on {addr} failed"))
}

fn main() {
    let cli = Cli::parse();

    // Config errors are logged once the subscriber exists, so load first
    let config = load_config(cli.config.as_deref());
    let level = config
        .as_ref()
        .map_or("info", |c| c.logging.level.as_str())
        .to_ascii_lowercase();
    logging::init(&level);

    let config = match config {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("{e:#}");
            process::exit(1);
        }
    };

    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            error!("{e}");
        }
        process::exit(1);
    }

    let result = match cli.command {
        #[cfg(feature = "api")]
        Command::Serve(ref args) => serve(&config, args),
        Command::Solve(ref args) => solve(&config, args),
    };

    if let Err(e) = result {
        error!("{e:#}");
        process::exit(1);
    }
}
