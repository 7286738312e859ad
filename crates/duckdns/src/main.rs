// # duckdns - DuckDNS update client
//
// This binary is a THIN integration layer:
// - DO NOT add resolution or update logic here
// - All DuckDNS logic lives in duckdns-core
//
// The binary is responsible for:
// 1. Parsing command-line flags
// 2. Opening the log sink
// 3. Wiring the resolver, transport and executor together
// 4. Mapping the outcome to an exit code
//
// ## Configuration
//
// Sources are consulted in order, each only filling what is still missing:
// 1. Flags: `--token`, `--names` (repeatable)
// 2. Environment: `DUCK_TOKEN`, `DUCK_NAMES` (space-separated)
// 3. File: `--config` (default `duckdns.yaml`) with `token` and `domains`
//
// ## Example
//
// ```bash
// export DUCK_TOKEN=your_token
// duckdns -n home -n office --log /var/log/duckdns.log
// ```

mod cli;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use duckdns_core::resolver::{Environment, Resolver};
use duckdns_core::{Error, UpdateExecutor};
use duckdns_http::HttpTransport;
use std::process::ExitCode;
use tokio::runtime::Runtime;
use tracing::{debug, error, info};

/// Exit codes for different termination scenarios
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DuckExitCode {
    /// Every name was updated
    Success = 0,
    /// Incomplete configuration or startup failure
    ConfigError = 1,
    /// An update failed
    UpdateFailed = 2,
}

impl From<DuckExitCode> for ExitCode {
    fn from(code: DuckExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

impl From<&Error> for DuckExitCode {
    fn from(err: &Error) -> Self {
        if err.is_config() {
            DuckExitCode::ConfigError
        } else {
            DuckExitCode::UpdateFailed
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = logging::level(cli.debug);
    let sink = logging::LogSink::open(cli.log.as_deref());
    let fallback = sink.fallback().map(str::to_string);
    let dispatch = logging::dispatch(level, sink);

    tracing::dispatcher::with_default(&dispatch, || {
        if let Some(reason) = fallback {
            info!("{}", reason);
        }
        debug!("Logging level: {}", level);

        run_cli(cli, Environment::from_process(), build_executor)
    })
    .into()
}

/// Build an executor on the reqwest transport
fn build_executor() -> Result<UpdateExecutor> {
    let transport = HttpTransport::new().context("Failed to build HTTP transport")?;
    Ok(UpdateExecutor::new(Box::new(transport)))
}

/// Create the runtime and the executor
fn startup<F>(build: F) -> Result<(Runtime, UpdateExecutor)>
where
    F: FnOnce() -> Result<UpdateExecutor>,
{
    // Current-thread runtime keeps the scoped dispatcher in effect
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create tokio runtime")?;

    let executor = build()?;
    Ok((rt, executor))
}

/// Run one update pass and pick the exit code
///
/// Startup failures exit as configuration errors before any source is read.
fn run_cli<F>(cli: Cli, environment: Environment, build: F) -> DuckExitCode
where
    F: FnOnce() -> Result<UpdateExecutor>,
{
    let (rt, executor) = match startup(build) {
        Ok(parts) => parts,
        Err(e) => {
            error!("Startup failed: {:#}", e);
            return DuckExitCode::ConfigError;
        }
    };

    match rt.block_on(run(&cli, &environment, &executor)) {
        Ok(()) => {
            info!("IP address updated successfully");
            DuckExitCode::Success
        }
        Err(e) if e.is_config() => {
            debug!("{}", e);
            error!("Arguments not set for update!");
            DuckExitCode::from(&e)
        }
        Err(e) => {
            error!("error updating IP address: {}", e);
            DuckExitCode::from(&e)
        }
    }
}

/// Resolve the update request and execute it
async fn run(
    cli: &Cli,
    environment: &Environment,
    executor: &UpdateExecutor,
) -> duckdns_core::Result<()> {
    let arguments = cli.arguments();
    let file = cli.config_file();

    let request = Resolver::layered(&arguments, environment, &file).resolve();

    executor.execute(request).await
}
