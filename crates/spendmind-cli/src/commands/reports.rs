//! Report command implementations

use anyhow::Result;
use spendmind_core::db::Database;
use spendmind_core::models::MonthlyReportRow;

use super::truncate;

pub fn cmd_report_monthly(db: &Database, json: bool) -> Result<()> {
    let rows: Vec<MonthlyReportRow> = db
        .monthly_totals()?
        .iter()
        .map(MonthlyReportRow::from)
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No expenses recorded yet.");
        return Ok(());
    }

    println!();
    println!("📅 Monthly Totals");
    println!("   ─────────────────────────");
    for row in rows {
        println!("   {} │ {:>12}", row.month, format!("${}", row.total));
    }

    Ok(())
}

pub fn cmd_report_by_category(db: &Database, json: bool) -> Result<()> {
    let rows = db.category_totals()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No expenses recorded yet.");
        return Ok(());
    }

    println!();
    println!("🏷️  Spending by Category");
    println!("   ─────────────────────────────────────");
    for row in rows {
        println!(
            "   {:<20} │ {:>12}",
            truncate(&row.category, 20),
            format!("${}", row.total)
        );
    }

    Ok(())
}

pub fn cmd_report_daily(db: &Database, limit: usize, json: bool) -> Result<()> {
    let rows = db.top_daily_totals(limit)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No expenses recorded yet.");
        return Ok(());
    }

    println!();
    println!("🔥 Top {} Spending Days", limit);
    println!("   ──────────────────────────────");
    for row in rows {
        println!("   {} │ {:>12}", row.date, format!("${}", row.total));
    }

    Ok(())
}
