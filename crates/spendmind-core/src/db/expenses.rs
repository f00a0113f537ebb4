//! Expense operations

use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension};
use rust_decimal::Decimal;
use tracing::debug;

use super::Database;
use crate::error::{Error, Result};
use crate::models::{
    from_cents, to_cents, Expense, ExpenseFilter, ExpenseWithCategory, NewExpense,
};

impl Database {
    /// Insert an expense
    ///
    /// The amount is stored with two decimal places. Negative amounts and
    /// unknown categories are rejected as invalid data.
    pub fn create_expense(&self, expense: &NewExpense) -> Result<Expense> {
        if expense.amount < Decimal::ZERO {
            return Err(Error::InvalidData("Amount must not be negative".to_string()));
        }
        let cents = to_cents(expense.amount)?;

        self.with_conn(|conn| {
            let category_exists: Option<i64> = conn
                .query_row(
                    "SELECT id FROM categories WHERE id = ?",
                    params![expense.category_id],
                    |row| row.get(0),
                )
                .optional()?;
            if category_exists.is_none() {
                return Err(Error::InvalidData(format!(
                    "Category {} does not exist",
                    expense.category_id
                )));
            }

            conn.execute(
                "INSERT INTO expenses (amount_cents, description, expense_date, category_id) VALUES (?, ?, ?, ?)",
                params![
                    cents,
                    expense.description,
                    expense.expense_date.to_string(),
                    expense.category_id
                ],
            )?;

            let id = conn.last_insert_rowid();
            debug!(id, category_id = expense.category_id, cents, "Created expense");

            Ok(Expense {
                id,
                amount: from_cents(cents),
                description: expense.description.clone(),
                expense_date: expense.expense_date,
                category_id: expense.category_id,
            })
        })
    }

    /// List expenses newest first, joined with their category name
    pub fn list_expenses(&self, filter: &ExpenseFilter) -> Result<Vec<ExpenseWithCategory>> {
        let mut conditions: Vec<&str> = Vec::new();
        let mut query_params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some((start, end)) = filter.date_range() {
            conditions.push("e.expense_date >= ? AND e.expense_date <= ?");
            query_params.push(Box::new(start.to_string()));
            query_params.push(Box::new(end.to_string()));
        }

        if let Some(category_id) = filter.category_id {
            conditions.push("e.category_id = ?");
            query_params.push(Box::new(category_id));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let sql = format!(
            r#"
            SELECT e.id, e.amount_cents, e.description, e.expense_date, e.category_id, c.name
            FROM expenses e
            JOIN categories c ON c.id = e.category_id
            {}
            ORDER BY e.expense_date DESC, e.id DESC
            LIMIT ?
            "#,
            where_clause
        );
        query_params.push(Box::new(filter.limit.max(0)));

        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&sql)?;
            let param_refs: Vec<&dyn rusqlite::ToSql> =
                query_params.iter().map(|p| p.as_ref()).collect();

            let rows = stmt.query_map(param_refs.as_slice(), |row| {
                let date_str: String = row.get(3)?;
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, i64>(1)?,
                    row.get::<_, Option<String>>(2)?,
                    date_str,
                    row.get::<_, i64>(4)?,
                    row.get::<_, String>(5)?,
                ))
            })?;

            let mut expenses = Vec::new();
            for row in rows {
                let (id, cents, description, date_str, category_id, category_name) = row?;
                expenses.push(ExpenseWithCategory {
                    id,
                    amount: from_cents(cents),
                    description,
                    expense_date: parse_date(&date_str)?,
                    category_id,
                    category_name,
                });
            }
            Ok(expenses)
        })
    }

    /// Count all stored expenses
    pub fn count_expenses(&self) -> Result<i64> {
        self.with_conn(|conn| {
            Ok(conn.query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))?)
        })
    }
}

/// Parse a stored `YYYY-MM-DD` date
pub(crate) fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| Error::InvalidData(format!("Bad stored date '{}': {}", s, e)))
}
