//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use spendmind_core::models::DEFAULT_EXPENSE_LIMIT;

/// SpendMind - Track expenses and learn where the money goes
#[derive(Parser)]
#[command(name = "spendmind")]
#[command(about = "Expense tracker with spending insights", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "spendmind.db", global = true)]
    pub db: PathBuf,

    /// Config file (defaults to the data dir override, then built-in settings)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Allowed CORS origin (repeatable; same-origin only when omitted)
        #[arg(long = "allow-origin")]
        allowed_origins: Vec<String>,

        /// Chart width in pixels
        #[arg(long, default_value = "640")]
        chart_width: u32,

        /// Chart height in pixels
        #[arg(long, default_value = "480")]
        chart_height: u32,
    },

    /// Fill the database with demo categories and random expenses
    Seed {
        /// Number of expenses to generate
        #[arg(short, long, default_value = "200")]
        count: usize,

        /// First possible expense date (YYYY-MM-DD)
        #[arg(long, default_value = "2025-11-01")]
        from: String,

        /// Last possible expense date (YYYY-MM-DD)
        #[arg(long, default_value = "2026-03-31")]
        to: String,
    },

    /// Manage categories
    Categories {
        #[command(subcommand)]
        action: Option<CategoriesAction>,
    },

    /// Record and list expenses
    Expenses {
        #[command(subcommand)]
        action: Option<ExpensesAction>,
    },

    /// Generate reports
    Report {
        #[command(subcommand)]
        report_type: ReportType,
    },

    /// Show spending insights
    Insights {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the monthly expenses chart as PNG
    Chart {
        /// Output file
        #[arg(short, long, default_value = "monthly_expenses.png")]
        output: PathBuf,

        /// Chart width in pixels
        #[arg(long, default_value = "640")]
        width: u32,

        /// Chart height in pixels
        #[arg(long, default_value = "480")]
        height: u32,
    },
}

#[derive(Subcommand)]
pub enum CategoriesAction {
    /// List all categories
    List,

    /// Add a category
    Add {
        /// Category name (must be unique)
        name: String,

        /// Mark as essential spending
        #[arg(long)]
        essential: bool,
    },
}

#[derive(Subcommand)]
pub enum ExpensesAction {
    /// List expenses, newest first
    List {
        /// Start date (YYYY-MM-DD), applied together with --to
        #[arg(long)]
        from: Option<String>,

        /// End date (YYYY-MM-DD), applied together with --from
        #[arg(long)]
        to: Option<String>,

        /// Category name or id
        #[arg(short, long)]
        category: Option<String>,

        /// Maximum number of expenses to show
        #[arg(short, long, default_value_t = DEFAULT_EXPENSE_LIMIT)]
        limit: i64,
    },

    /// Record an expense
    Add {
        /// Amount (e.g. 12.50)
        amount: String,

        /// Category name or id
        #[arg(short, long)]
        category: String,

        /// Expense date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Free-form description
        #[arg(short, long)]
        description: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ReportType {
    /// Totals per calendar month
    Monthly {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Totals per category, largest first
    ByCategory {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Days with the highest totals
    Daily {
        /// Number of days (defaults to reports.top_days from config)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
