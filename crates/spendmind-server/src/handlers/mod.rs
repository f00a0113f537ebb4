//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod categories;
pub mod charts;
pub mod expenses;
pub mod health;
pub mod insights;
pub mod reports;

// Re-export all handlers for use in router
pub use categories::*;
pub use charts::*;
pub use expenses::*;
pub use health::*;
pub use insights::*;
pub use reports::*;
