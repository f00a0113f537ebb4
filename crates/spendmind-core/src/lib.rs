//! SpendMind Core Library
//!
//! Shared functionality for the SpendMind expense tracker:
//! - Database access and migrations (categories, expenses)
//! - Aggregation reports (monthly, by category, top days)
//! - Insight engine producing spending statements
//! - PNG chart rendering of monthly totals
//! - Configuration loading
//! - Demo data seeding

pub mod chart;
pub mod config;
pub mod db;
pub mod error;
pub mod insights;
pub mod models;
pub mod seed;

pub use chart::{render_monthly_chart, ChartSize};
pub use config::{Config, InsightConfig, ReportConfig};
pub use db::Database;
pub use error::{Error, Result};
pub use insights::{Insight, InsightEngine};
pub use seed::{seed_demo_data, SeedOptions, SeedResult};
