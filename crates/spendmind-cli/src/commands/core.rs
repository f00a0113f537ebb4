//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_db` - Shared utility to open the database
//! - `load_config` - Resolve insight/report settings
//! - `cmd_init` - Initialize the database

use std::path::Path;

use anyhow::{Context, Result};
use spendmind_core::{db::Database, Config};

/// Open (and migrate) the database at the given path
pub fn open_db(db_path: &Path) -> Result<Database> {
    let path_str = db_path
        .to_str()
        .with_context(|| format!("Database path is not valid UTF-8: {}", db_path.display()))?;
    Database::new(path_str).context("Failed to open database")
}

/// Load config from --config, the data dir override, or built-in defaults
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    if let Some(p) = path {
        if !p.exists() {
            anyhow::bail!("Config file not found: {}", p.display());
        }
    }
    Config::load(path).context("Failed to load config")
}

pub fn cmd_init(db_path: &Path) -> Result<()> {
    println!("🔧 Initializing database at {}...", db_path.display());

    let db = open_db(db_path)?;
    let categories = db.list_categories()?.len();
    let expenses = db.count_expenses()?;
    println!("   {} categories, {} expenses", categories, expenses);

    println!("✅ Database initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  1. Add a category: spendmind categories add Food");
    println!("  2. Or load demo data: spendmind seed");
    println!("  3. Start the API: spendmind serve");

    Ok(())
}
