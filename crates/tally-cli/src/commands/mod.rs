//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Init and shared utilities (open_db)
//! - `expenses` - Add, list, recent and reset commands
//! - `reports` - Summary, forecast and monthly overview
//! - `serve` - Web server command

pub mod core;
pub mod expenses;
pub mod reports;
pub mod serve;

// Re-export command functions for main.rs
pub use core::*;
pub use expenses::*;
pub use reports::*;
pub use serve::*;

/// Truncate a string to a maximum number of characters, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Format an amount as dollars, or "n/a" when the stored value was not a number
pub fn format_amount(amount: f64) -> String {
    if amount.is_finite() {
        format!("${:.2}", amount)
    } else {
        "n/a".to_string()
    }
}
