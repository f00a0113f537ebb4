//! Grouped spending reports
//!
//! These are the aggregation views the insight engine consumes. Sums are
//! computed in integer cents by SQLite and converted to decimals afterwards.

use rusqlite::params;

use super::expenses::parse_date;
use super::Database;
use crate::error::Result;
use crate::models::{from_cents, CategoryTotal, DailyTotal, MonthlyTotal};

impl Database {
    /// Total spent per calendar month, oldest month first
    pub fn monthly_totals(&self) -> Result<Vec<MonthlyTotal>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                r#"
                SELECT
                    CAST(strftime('%Y', expense_date) AS INTEGER) AS year,
                    CAST(strftime('%m', expense_date) AS INTEGER) AS month,
                    SUM(amount_cents) AS total
                FROM expenses
                GROUP BY year, month
                ORDER BY year, month
                "#,
            )?;

            let totals = stmt
                .query_map([], |row| {
                    Ok(MonthlyTotal {
                        year: row.get(0)?,
                        month: row.get(1)?,
                        total: from_cents(row.get(2)?),
                    })
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(totals)
        })
    }

    /// Total spent per category, largest first
    ///
    /// Categories without expenses are omitted. Equal totals are ordered by name.
    pub fn category_totals(&self) -> Result<Vec<CategoryTotal>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                r#"
                SELECT c.name, SUM(e.amount_cents) AS total
                FROM categories c
                JOIN expenses e ON e.category_id = c.id
                GROUP BY c.id, c.name
                ORDER BY total DESC, c.name
                "#,
            )?;

            let totals = stmt
                .query_map([], |row| {
                    Ok(CategoryTotal {
                        category: row.get(0)?,
                        total: from_cents(row.get(1)?),
                    })
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(totals)
        })
    }

    /// The `limit` days with the highest total spending, largest first
    pub fn top_daily_totals(&self, limit: usize) -> Result<Vec<DailyTotal>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                r#"
                SELECT expense_date, SUM(amount_cents) AS total
                FROM expenses
                GROUP BY expense_date
                ORDER BY total DESC, expense_date
                LIMIT ?
                "#,
            )?;

            let rows = stmt
                .query_map(params![limit as i64], |row| {
                    Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;

            rows.into_iter()
                .map(|(date, cents)| {
                    Ok(DailyTotal {
                        date: parse_date(&date)?,
                        total: from_cents(cents),
                    })
                })
                .collect()
        })
    }
}
