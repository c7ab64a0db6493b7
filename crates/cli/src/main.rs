//! Mockfront CLI - data file management tools.
//!
//! # Usage
//!
//! ```bash
//! # Write the sample catalog and an uncreated checkout to the data file
//! mf-cli seed
//!
//! # Overwrite an existing data file
//! mf-cli seed --force
//!
//! # Clear the checkout back to "never created", keeping the catalog
//! mf-cli reset
//! ```
//!
//! The data file path comes from `--data-file`, falling back to
//! `MOCKFRONT_DATA_FILE` and then `data/index.json`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "mf-cli")]
#[command(author, version, about = "Mockfront CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the sample catalog and a fresh checkout slot to the data file
    Seed {
        /// Target data file (default: MOCKFRONT_DATA_FILE or data/index.json)
        #[arg(short, long)]
        data_file: Option<PathBuf>,

        /// Overwrite the data file if it already exists
        #[arg(short, long)]
        force: bool,
    },
    /// Reset the checkout to "never created", keeping the catalog
    Reset {
        /// Target data file (default: MOCKFRONT_DATA_FILE or data/index.json)
        #[arg(short, long)]
        data_file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed { data_file, force } => commands::seed::run(data_file, force).await?,
        Commands::Reset { data_file } => commands::reset::run(data_file).await?,
    }
    Ok(())
}
