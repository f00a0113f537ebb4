//! Domain models for SpendMind

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of decimal places kept for every stored amount
pub const AMOUNT_SCALE: u32 = 2;

/// Convert a decimal amount to whole cents, rounding half away from zero
pub fn to_cents(amount: Decimal) -> Result<i64> {
    let rounded = amount.round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero);
    (rounded * Decimal::ONE_HUNDRED)
        .to_i64()
        .ok_or_else(|| Error::InvalidData(format!("Amount out of range: {}", amount)))
}

/// Convert whole cents back to a two-decimal amount
pub fn from_cents(cents: i64) -> Decimal {
    Decimal::new(cents, AMOUNT_SCALE)
}

/// A named grouping for expenses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    /// Whether spending in this category is a necessity (rent, health, ...)
    pub essential: bool,
}

/// Request body for creating a category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    #[serde(default)]
    pub essential: bool,
}

impl NewCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            essential: false,
        }
    }

    pub fn essential(mut self, essential: bool) -> Self {
        self.essential = essential;
        self
    }
}

/// A dated monetary record belonging to exactly one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub amount: Decimal,
    pub description: Option<String>,
    pub expense_date: NaiveDate,
    pub category_id: i64,
}

/// Request body for creating an expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExpense {
    pub amount: Decimal,
    #[serde(default)]
    pub description: Option<String>,
    pub expense_date: NaiveDate,
    pub category_id: i64,
}

/// An expense joined with the name of its category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseWithCategory {
    pub id: i64,
    pub amount: Decimal,
    pub description: Option<String>,
    pub expense_date: NaiveDate,
    pub category_id: i64,
    pub category_name: String,
}

/// Default number of expenses returned by a listing
pub const DEFAULT_EXPENSE_LIMIT: i64 = 50;

/// Filters for listing expenses
///
/// The date range only applies when both bounds are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub category_id: Option<i64>,
    pub limit: i64,
}

impl Default for ExpenseFilter {
    fn default() -> Self {
        Self {
            start_date: None,
            end_date: None,
            category_id: None,
            limit: DEFAULT_EXPENSE_LIMIT,
        }
    }
}

impl ExpenseFilter {
    /// Both bounds of the date range, if both were given
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }
}

// ========== Aggregation views ==========

/// Total spent in one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyTotal {
    pub year: i32,
    pub month: u32,
    pub total: Decimal,
}

impl MonthlyTotal {
    pub fn new(year: i32, month: u32, total: Decimal) -> Self {
        Self { year, month, total }
    }

    /// Sortable `YYYY-MM` key
    pub fn key(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    /// Human-facing `M/YYYY` label
    pub fn label(&self) -> String {
        format!("{}/{}", self.month, self.year)
    }
}

/// Row of the monthly report as exposed over the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyReportRow {
    /// Month in `YYYY-MM` format
    pub month: String,
    pub total: Decimal,
}

impl From<&MonthlyTotal> for MonthlyReportRow {
    fn from(m: &MonthlyTotal) -> Self {
        Self {
            month: m.key(),
            total: m.total,
        }
    }
}

/// Total spent in one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
}

impl CategoryTotal {
    pub fn new(category: impl Into<String>, total: Decimal) -> Self {
        Self {
            category: category.into(),
            total,
        }
    }
}

/// Total spent on one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total: Decimal,
}
