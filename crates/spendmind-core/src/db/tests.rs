//! Database tests

use super::*;
use crate::error::Error;
use crate::models::*;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn add_expense(db: &Database, category_id: i64, amount: rust_decimal::Decimal, on: NaiveDate) -> Expense {
    db.create_expense(&NewExpense {
        amount,
        description: None,
        expense_date: on,
        category_id,
    })
    .unwrap()
}

#[test]
fn test_in_memory_db() {
    let db = Database::in_memory().unwrap();
    assert!(db.list_categories().unwrap().is_empty());
    assert_eq!(db.count_expenses().unwrap(), 0);
}

#[test]
fn test_schema_exists() {
    let db = Database::in_memory().unwrap();
    let conn = db.conn().unwrap();

    let result: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM pragma_table_info('categories') WHERE name IN ('id', 'name', 'essential')",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(result, 3, "categories table should have 3 expected columns");

    let result: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM pragma_table_info('expenses') WHERE name IN ('id', 'amount_cents', 'description', 'expense_date', 'category_id')",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(result, 5, "expenses table should have 5 expected columns");
}

#[test]
fn test_reopen_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spend.db");
    let path = path.to_str().unwrap();

    {
        let db = Database::new(path).unwrap();
        db.create_category(&NewCategory::new("Food")).unwrap();
    }

    let db = Database::new(path).unwrap();
    assert_eq!(db.path(), path);
    assert_eq!(db.list_categories().unwrap().len(), 1);
}

// ========== Categories ==========

#[test]
fn test_create_and_list_categories() {
    let db = Database::in_memory().unwrap();

    let rent = db
        .create_category(&NewCategory::new("Rent").essential(true))
        .unwrap();
    assert!(rent.id > 0);
    assert!(rent.essential);

    db.create_category(&NewCategory::new("Food")).unwrap();
    db.create_category(&NewCategory::new("Leisure")).unwrap();

    let names: Vec<String> = db
        .list_categories()
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Food", "Leisure", "Rent"]);

    let found = db.get_category(rent.id).unwrap().unwrap();
    assert_eq!(found, rent);
    assert_eq!(db.get_category_by_name("Rent").unwrap(), Some(rent));
    assert_eq!(db.get_category(9999).unwrap(), None);
}

#[test]
fn test_duplicate_category_rejected() {
    let db = Database::in_memory().unwrap();
    db.create_category(&NewCategory::new("Food")).unwrap();

    let err = db.create_category(&NewCategory::new("Food")).unwrap_err();
    assert!(matches!(err, Error::AlreadyExists(_)));
    assert_eq!(err.to_string(), "Category already exists");

    // No partial write
    assert_eq!(db.list_categories().unwrap().len(), 1);
}

#[test]
fn test_blank_category_name_rejected() {
    let db = Database::in_memory().unwrap();
    let err = db.create_category(&NewCategory::new("   ")).unwrap_err();
    assert!(matches!(err, Error::InvalidData(_)));
}

#[test]
fn test_category_delete_is_restricted() {
    let db = Database::in_memory().unwrap();
    let food = db.create_category(&NewCategory::new("Food")).unwrap();
    add_expense(&db, food.id, dec!(10), date(2025, 1, 1));

    let conn = db.conn().unwrap();
    let result = conn.execute("DELETE FROM categories WHERE id = ?", [food.id]);
    assert!(result.is_err(), "deleting a referenced category must fail");
}

// ========== Expenses ==========

#[test]
fn test_create_expense_normalizes_amount() {
    let db = Database::in_memory().unwrap();
    let food = db.create_category(&NewCategory::new("Food")).unwrap();

    let expense = db
        .create_expense(&NewExpense {
            amount: dec!(12.345),
            description: Some("Lunch".to_string()),
            expense_date: date(2025, 2, 3),
            category_id: food.id,
        })
        .unwrap();

    assert_eq!(expense.amount, dec!(12.35));
    assert_eq!(expense.description.as_deref(), Some("Lunch"));
    assert_eq!(expense.category_id, food.id);
}

#[test]
fn test_create_expense_rejects_negative_amount() {
    let db = Database::in_memory().unwrap();
    let food = db.create_category(&NewCategory::new("Food")).unwrap();

    let err = db
        .create_expense(&NewExpense {
            amount: dec!(-1),
            description: None,
            expense_date: date(2025, 2, 3),
            category_id: food.id,
        })
        .unwrap_err();
    assert!(matches!(err, Error::InvalidData(_)));
}

#[test]
fn test_create_expense_rejects_unknown_category() {
    let db = Database::in_memory().unwrap();
    let err = db
        .create_expense(&NewExpense {
            amount: dec!(5),
            description: None,
            expense_date: date(2025, 2, 3),
            category_id: 42,
        })
        .unwrap_err();
    assert!(matches!(err, Error::InvalidData(_)));
    assert_eq!(db.count_expenses().unwrap(), 0);
}

#[test]
fn test_list_expenses_newest_first_with_category() {
    let db = Database::in_memory().unwrap();
    let food = db.create_category(&NewCategory::new("Food")).unwrap();
    let rent = db.create_category(&NewCategory::new("Rent")).unwrap();

    add_expense(&db, food.id, dec!(10), date(2025, 1, 5));
    add_expense(&db, rent.id, dec!(800), date(2025, 1, 1));
    add_expense(&db, food.id, dec!(12.5), date(2025, 2, 10));

    let all = db.list_expenses(&ExpenseFilter::default()).unwrap();
    let dates: Vec<NaiveDate> = all.iter().map(|e| e.expense_date).collect();
    assert_eq!(dates, vec![date(2025, 2, 10), date(2025, 1, 5), date(2025, 1, 1)]);
    assert_eq!(all[0].category_name, "Food");
    assert_eq!(all[0].amount, dec!(12.50));
    assert_eq!(all[2].category_name, "Rent");
}

#[test]
fn test_list_expenses_filters() {
    let db = Database::in_memory().unwrap();
    let food = db.create_category(&NewCategory::new("Food")).unwrap();
    let rent = db.create_category(&NewCategory::new("Rent")).unwrap();

    add_expense(&db, food.id, dec!(10), date(2025, 1, 5));
    add_expense(&db, rent.id, dec!(800), date(2025, 1, 1));
    add_expense(&db, food.id, dec!(12.5), date(2025, 2, 10));
    add_expense(&db, food.id, dec!(3), date(2025, 3, 1));

    // Category filter
    let food_only = db
        .list_expenses(&ExpenseFilter {
            category_id: Some(food.id),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(food_only.len(), 3);
    assert!(food_only.iter().all(|e| e.category_name == "Food"));

    // Date range is inclusive on both ends
    let january = db
        .list_expenses(&ExpenseFilter {
            start_date: Some(date(2025, 1, 1)),
            end_date: Some(date(2025, 1, 31)),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(january.len(), 2);

    // A single bound is ignored
    let start_only = db
        .list_expenses(&ExpenseFilter {
            start_date: Some(date(2025, 3, 1)),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(start_only.len(), 4);

    // Limit
    let limited = db
        .list_expenses(&ExpenseFilter {
            limit: 2,
            ..Default::default()
        })
        .unwrap();
    assert_eq!(limited.len(), 2);
    assert_eq!(limited[0].expense_date, date(2025, 3, 1));
}

// ========== Reports ==========

fn seed_report_data(db: &Database) {
    let food = db.create_category(&NewCategory::new("Food")).unwrap();
    let rent = db.create_category(&NewCategory::new("Rent")).unwrap();
    let fun = db.create_category(&NewCategory::new("Leisure")).unwrap();
    db.create_category(&NewCategory::new("Unused")).unwrap();

    add_expense(db, rent.id, dec!(800), date(2025, 1, 1));
    add_expense(db, food.id, dec!(20.25), date(2025, 1, 1));
    add_expense(db, food.id, dec!(30.50), date(2025, 1, 15));
    add_expense(db, fun.id, dec!(45), date(2024, 12, 24));
    add_expense(db, rent.id, dec!(800), date(2025, 2, 1));
    add_expense(db, food.id, dec!(15.10), date(2025, 2, 2));
}

#[test]
fn test_monthly_totals_chronological() {
    let db = Database::in_memory().unwrap();
    seed_report_data(&db);

    let monthly = db.monthly_totals().unwrap();
    assert_eq!(
        monthly,
        vec![
            MonthlyTotal::new(2024, 12, dec!(45.00)),
            MonthlyTotal::new(2025, 1, dec!(850.75)),
            MonthlyTotal::new(2025, 2, dec!(815.10)),
        ]
    );
}

#[test]
fn test_category_totals_descending() {
    let db = Database::in_memory().unwrap();
    seed_report_data(&db);

    let totals = db.category_totals().unwrap();
    assert_eq!(
        totals,
        vec![
            CategoryTotal::new("Rent", dec!(1600.00)),
            CategoryTotal::new("Food", dec!(65.85)),
            CategoryTotal::new("Leisure", dec!(45.00)),
        ]
    );
    assert!(totals.windows(2).all(|w| w[0].total >= w[1].total));
}

#[test]
fn test_top_daily_totals() {
    let db = Database::in_memory().unwrap();
    seed_report_data(&db);

    let days = db.top_daily_totals(2).unwrap();
    assert_eq!(days.len(), 2);
    assert_eq!(days[0].date, date(2025, 1, 1));
    assert_eq!(days[0].total, dec!(820.25));
    assert_eq!(days[1].date, date(2025, 2, 1));

    let all = db.top_daily_totals(10).unwrap();
    assert_eq!(all.len(), 5);
}

#[test]
fn test_reports_empty() {
    let db = Database::in_memory().unwrap();
    assert!(db.monthly_totals().unwrap().is_empty());
    assert!(db.category_totals().unwrap().is_empty());
    assert!(db.top_daily_totals(10).unwrap().is_empty());
}
