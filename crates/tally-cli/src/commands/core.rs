//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_db` - Shared utility to open the database
//! - `cmd_init` - Initialize the database

use std::path::Path;

use anyhow::{Context, Result};
use tally_core::db::Database;
use tracing::debug;

/// Open (and migrate) the database at `db_path`
pub fn open_db(db_path: &Path) -> Result<Database> {
    let path_str = db_path
        .to_str()
        .context("Database path must be valid UTF-8")?;
    debug!(path = path_str, "Opening database");
    Database::new(path_str).context("Failed to open database")
}

pub fn cmd_init(db_path: &Path) -> Result<()> {
    println!("🔧 Initializing database at {}...", db_path.display());

    let db = open_db(db_path)?;
    let count = db.count_expenses().context("Failed to read expenses")?;

    println!("✅ Database initialized successfully!");
    if count > 0 {
        println!("   {} existing expense(s) kept", count);
    }
    println!();
    println!("Next steps:");
    println!("  1. Record an expense: tally add -d Lunch -c Food -a 12.50");
    println!("  2. See totals: tally summary");

    Ok(())
}
