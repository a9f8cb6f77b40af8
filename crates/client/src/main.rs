//! Boshi game client binary.
//!
//! Composition root: loads configuration, installs logging, validates the
//! built-in scenario and hands it to the selected frontend.
//!
//! # Features
//!
//! - `cli`: Terminal-based UI (default)
//!
//! # Environment
//!
//! A `.env` file in the working directory is loaded first. `RUST_LOG`
//! controls the log filter; see `CliConfig::from_env` for the rest.

use anyhow::Result;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "cli")]
    {
        run_cli()?;
    }

    #[cfg(not(feature = "cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (cli)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "cli")]
fn run_cli() -> Result<()> {
    use client_frontend_cli::{CliConfig, CliFrontend, logging};
    use game_content::Boshi;

    // 1. Load configuration from environment
    let cli_config = CliConfig::from_env();

    // 2. Setup logging; the guard flushes the log file on exit
    let _log_guard = logging::setup_logging(cli_config.log_dir.as_deref())?;

    tracing::info!("Starting Boshi client");
    tracing::info!(
        frame_delay_ms = cli_config.frame_delay.as_millis() as u64,
        settle_delay_ms = cli_config.settle_delay.as_millis() as u64,
        "pacing"
    );

    // 3. Check the built-in content before touching the terminal
    let scenario = Boshi::new();
    scenario.validate()?;
    tracing::debug!("scenario validated");

    // 4. Run the session
    let frontend = CliFrontend::new(cli_config);
    frontend.run(&scenario.env())?;

    tracing::info!("Boshi client exited");
    Ok(())
}
