//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tally - Track expenses and see where the money goes
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Expense tracker with category totals, forecasts and monthly overviews", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "tally.db", global = true)]
    pub db: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print machine-readable JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Record a new expense, stamped with the current time
    Add {
        /// What the money was spent on
        #[arg(short, long)]
        description: String,

        /// Category to file the expense under
        #[arg(short, long)]
        category: String,

        /// Amount spent (e.g. 12.50)
        #[arg(short, long, allow_hyphen_values = true)]
        amount: String,
    },

    /// List expenses, newest first
    List {
        /// Maximum number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show the most recent expenses
    Recent {
        /// Number of expenses to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Total spend per category
    Summary,

    /// Forecast weekly, monthly and yearly spend from the last 30 days
    Forecast,

    /// Browse expenses grouped by month
    Overview {
        /// Only show this month (e.g. January)
        #[arg(short, long)]
        month: Option<String>,

        /// Only show this year (e.g. 2025)
        #[arg(short, long)]
        year: Option<String>,
    },

    /// Delete every expense
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Start the REST API server
    Serve {
        /// Address to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
}
