//! Expense command implementations

use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::Local;
use rust_decimal::Decimal;
use spendmind_core::db::Database;
use spendmind_core::models::{Expense, ExpenseFilter, NewExpense};

use super::{parse_date_arg, resolve_category, truncate};

pub fn cmd_expenses_list(
    db: &Database,
    from: Option<&str>,
    to: Option<&str>,
    category: Option<&str>,
    limit: i64,
) -> Result<()> {
    let filter = ExpenseFilter {
        start_date: from.map(|d| parse_date_arg(d, "--from")).transpose()?,
        end_date: to.map(|d| parse_date_arg(d, "--to")).transpose()?,
        category_id: category
            .map(|c| resolve_category(db, c).map(|c| c.id))
            .transpose()?,
        limit: limit.max(1),
    };
    if filter.date_range().is_none() && (from.is_some() || to.is_some()) {
        println!("   ⚠️  Date filter needs both --from and --to; ignoring");
    }

    let expenses = db.list_expenses(&filter)?;

    if expenses.is_empty() {
        println!("No expenses found. Record one with:");
        println!("  spendmind expenses add 12.50 --category Food");
        return Ok(());
    }

    println!();
    println!("📝 Expenses");
    println!("   ─────────────────────────────────────────────────────────────");

    for expense in expenses {
        println!(
            "   {} │ {:>10} │ {:<16} │ {}",
            expense.expense_date,
            format!("${}", expense.amount),
            truncate(&expense.category_name, 16),
            truncate(expense.description.as_deref().unwrap_or(""), 32)
        );
    }

    Ok(())
}

pub fn cmd_expenses_add(
    db: &Database,
    amount: &str,
    category: &str,
    date: Option<&str>,
    description: Option<&str>,
) -> Result<Expense> {
    let amount = Decimal::from_str(amount)
        .with_context(|| format!("Invalid amount: {}", amount))?;
    let expense_date = match date {
        Some(d) => parse_date_arg(d, "--date")?,
        None => Local::now().date_naive(),
    };
    let category = resolve_category(db, category)?;

    let expense = db
        .create_expense(&NewExpense {
            amount,
            description: description.map(str::to_string),
            expense_date,
            category_id: category.id,
        })
        .context("Failed to record expense")?;

    println!(
        "✅ Recorded ${} in {} on {} (id {})",
        expense.amount, category.name, expense.expense_date, expense.id
    );
    Ok(expense)
}
