//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domaintools` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use domaintools::initialization::init_logger_with;
use domaintools::{run, Config};

fn main() -> Result<()> {
    // Lets RUST_LOG and friends live in a .env file
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Not #[tokio::main]: the DNS fallback resolver blocks on its own runtime
    match run(config) {
        Ok(_) => Ok(()),
        Err(e) => {
            eprintln!("domaintools error: {:#}", e);
            process::exit(1);
        }
    }
}
