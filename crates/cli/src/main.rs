//! Roastline CLI - Catalog seeding and cart management tools.
//!
//! # Usage
//!
//! ```bash
//! # Write the built-in seed catalog to the configured catalog path
//! roastline-cli seed
//!
//! # Overwrite an existing catalog file
//! roastline-cli seed --force
//!
//! # Print the persisted cart
//! roastline-cli cart show
//!
//! # Delete the persisted cart
//! roastline-cli cart clear
//! ```
//!
//! Paths come from the same environment variables the storefront uses
//! (`STOREFRONT_DATA_DIR`, `STOREFRONT_CATALOG_PATH`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "roastline-cli")]
#[command(author, version, about = "Roastline CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the built-in seed catalog to the catalog path
    Seed {
        /// Overwrite an existing catalog file
        #[arg(long)]
        force: bool,
    },
    /// Inspect or clear the persisted cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Print the stored line items and totals
    Show,
    /// Delete the stored cart
    Clear,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed { force } => commands::seed::catalog(force)?,
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show()?,
            CartAction::Clear => commands::cart::clear()?,
        },
    }
    Ok(())
}
