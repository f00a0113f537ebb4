//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `categories` - Category commands (list, add)
//! - `chart` - Monthly chart export
//! - `core` - Core commands (init) and shared utilities (open_db, load_config)
//! - `expenses` - Expense commands (list, add)
//! - `insights` - Insight generation
//! - `reports` - Report generation commands
//! - `seed` - Demo data generation
//! - `serve` - Web server command

pub mod categories;
pub mod chart;
pub mod core;
pub mod expenses;
pub mod insights;
pub mod reports;
pub mod seed;
pub mod serve;

// Re-export command functions for main.rs
pub use categories::*;
pub use chart::*;
pub use core::*;
pub use expenses::*;
pub use insights::*;
pub use reports::*;
pub use seed::*;
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

/// Parse a YYYY-MM-DD date argument
pub fn parse_date_arg(value: &str, flag: &str) -> anyhow::Result<chrono::NaiveDate> {
    chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid {} date format (use YYYY-MM-DD)", flag))
}
