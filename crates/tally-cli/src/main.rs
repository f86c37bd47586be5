//! Tally CLI - Expense tracker
//!
//! Usage:
//!   tally init                                  Initialize database
//!   tally add -d Lunch -c Food -a 12.50         Record an expense
//!   tally summary                               Totals per category
//!   tally forecast                              Weekly/monthly/yearly projection
//!   tally overview --month January --year 2025  Expenses grouped by month
//!   tally serve --port 3000                     Start REST API server

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let json = cli.json;
    let open = || commands::open_db(&cli.db);

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db),
        Commands::Add {
            description,
            category,
            amount,
        } => commands::cmd_add(&open()?, &description, &category, &amount, json),
        Commands::List { limit } => commands::cmd_list(&open()?, limit, json),
        Commands::Recent { limit } => commands::cmd_recent(&open()?, limit, json),
        Commands::Summary => commands::cmd_summary(&open()?, json),
        Commands::Forecast => commands::cmd_forecast(&open()?, json),
        Commands::Overview { month, year } => {
            commands::cmd_overview(&open()?, month.as_deref(), year.as_deref(), json)
        }
        Commands::Reset { yes } => commands::cmd_reset(&open()?, yes),
        Commands::Serve { host, port } => commands::cmd_serve(&cli.db, &host, port).await,
    }
}
