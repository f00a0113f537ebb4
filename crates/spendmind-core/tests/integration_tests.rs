//! Integration tests for spendmind-core
//!
//! These tests exercise the full record → aggregate → insight workflow.

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use spendmind_core::{
    db::Database,
    insights::{InsightEngine, NOT_ENOUGH_DATA},
    models::{ExpenseFilter, NewCategory, NewExpense},
    Config,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn record(db: &Database, category_id: i64, amount: rust_decimal::Decimal, on: NaiveDate) {
    db.create_expense(&NewExpense {
        amount,
        description: None,
        expense_date: on,
        category_id,
    })
    .expect("Failed to create expense");
}

#[test]
fn test_insights_from_stored_expenses() {
    let db = Database::in_memory().expect("Failed to create database");
    let engine = InsightEngine::new(Config::default().insights);

    let rent = db.create_category(&NewCategory::new("Rent").essential(true)).unwrap();
    let food = db.create_category(&NewCategory::new("Food")).unwrap();

    record(&db, rent.id, dec!(1000), date(2025, 1, 1));
    record(&db, food.id, dec!(250), date(2025, 1, 12));
    record(&db, rent.id, dec!(1000), date(2025, 2, 1));
    record(&db, food.id, dec!(500), date(2025, 2, 20));
    record(&db, rent.id, dec!(1000), date(2025, 3, 1));
    record(&db, food.id, dec!(1250), date(2025, 3, 5));

    let monthly = db.monthly_totals().unwrap();
    let categories = db.category_totals().unwrap();
    let messages = engine.messages(&monthly, &categories);

    assert_eq!(
        messages,
        vec![
            "📈 The month with the highest expenses was 3/2025 with a total of $2,250.",
            "📉 The month with the lowest expenses was 1/2025 with a total of $1,250.",
            "🔥 The category you spend the most on is 'Rent', accounting for $3,000 of your total expenses.",
            "🏠 Rent represents 60.0% of all your expenses.",
            "📊 Your expenses have increased by 80.0% over the analyzed period.",
        ]
    );
}

#[test]
fn test_insights_on_empty_database() {
    let db = Database::in_memory().unwrap();
    db.create_category(&NewCategory::new("Food")).unwrap();

    let engine = InsightEngine::default();
    let messages = engine.messages(&db.monthly_totals().unwrap(), &db.category_totals().unwrap());
    assert_eq!(messages, vec![NOT_ENOUGH_DATA]);
}

#[test]
fn test_expense_round_trip_with_category_filter() {
    let db = Database::in_memory().unwrap();
    let food = db.create_category(&NewCategory::new("Food")).unwrap();
    let other = db.create_category(&NewCategory::new("Other")).unwrap();

    let created = db
        .create_expense(&NewExpense {
            amount: dec!(9.99),
            description: Some("Groceries".to_string()),
            expense_date: date(2025, 4, 2),
            category_id: food.id,
        })
        .unwrap();
    record(&db, other.id, dec!(1), date(2025, 4, 3));

    let listed = db
        .list_expenses(&ExpenseFilter {
            category_id: Some(food.id),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);
    assert_eq!(listed[0].amount, dec!(9.99));
    assert_eq!(listed[0].description.as_deref(), Some("Groceries"));
    assert_eq!(listed[0].category_name, "Food");
}
