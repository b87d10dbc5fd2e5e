mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod utils;

use crate::cli::Cli;
use crate::error::{CliError, Result};
use clap::Parser;
use tokio::task;
use tracing::{debug, error, info};

#[tokio::main]
async fn main() {
    let exit_code = tokio::select! {
        result = run_app() => exit_code(result),
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted by user.");
            eprintln!("\nProcess interrupted.");
            0
        }
    };
    std::process::exit(exit_code);
}

fn exit_code(result: Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            debug!("Run failed: {:?}", e);
            eprintln!("Error: {}", e);
            1
        }
    }
}

async fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook
        .install()
        .map_err(|e| CliError::Other(anyhow::anyhow!("Failed to install error hook: {}", e)))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!("molstack v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let app_config = config::resolve(&cli)?;
    debug!("Resolved configuration: {:?}", &app_config);

    let outcome = task::spawn_blocking(move || commands::stack::run(app_config))
        .await
        .map_err(|e| CliError::Other(anyhow::anyhow!("Generation task failed: {}", e)))??;
    debug!("Stacking finished with outcome: {:?}", outcome);

    Ok(())
}
