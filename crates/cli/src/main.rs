//! Vitrina CLI - store seeding and inspection tools.
//!
//! # Usage
//!
//! ```bash
//! # Seed a store file with the default catalog
//! vitrina seed
//!
//! # List the catalog, optionally by category
//! vitrina catalog list
//! vitrina catalog list -c relojes
//!
//! # Print dashboard stats for a time window
//! vitrina stats -w week
//! ```
//!
//! The store file defaults to `./vitrina-store.json`; pass `--store` to use
//! another file. Configuration comes from the environment (see
//! `vitrina_storefront::config`), loaded through `.env` when present.

#![cfg_attr(not(test), forbid(unsafe_code))]
// A CLI talks to its user on stdout.
#![allow(clippy::print_stdout)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use vitrina_core::Category;
use vitrina_admin::dashboard::TimeWindow;

mod commands;

#[derive(Parser)]
#[command(name = "vitrina")]
#[command(author, version, about = "Vitrina storefront tools")]
struct Cli {
    /// Path of the store file.
    #[arg(long, default_value = "vitrina-store.json")]
    store: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the store with the default catalog
    Seed {
        /// Overwrite an existing catalog
        #[arg(long)]
        force: bool,
    },
    /// Inspect the catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Print dashboard stats from the order log
    Stats {
        /// Time window: today, week, month, or all
        #[arg(short, long, default_value = "all")]
        window: TimeWindow,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List products
    List {
        /// Only one category: perfumes, tecnologia, electrodomesticos, relojes
        #[arg(short, long)]
        category: Option<Category>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Seed { force } => commands::seed::run(&cli.store, force),
        Commands::Catalog {
            action: CatalogAction::List { category },
        } => commands::catalog::list(&cli.store, category),
        Commands::Stats { window } => commands::stats::run(&cli.store, window),
    }
}
