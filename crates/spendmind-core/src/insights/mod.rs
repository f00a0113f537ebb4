//! Insight Engine - spending statements derived from aggregation views
//!
//! The engine is a pure transform: it never touches the database. Callers
//! fetch the monthly and category totals and pass them in.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use spendmind_core::insights::InsightEngine;
//!
//! let engine = InsightEngine::new(config.insights.clone());
//! let messages = engine.messages(&db.monthly_totals()?, &db.category_totals()?);
//! ```

pub mod engine;
pub mod format;

pub use engine::{Insight, InsightEngine, TrendDirection, NOT_ENOUGH_DATA};
