//! Demo data generator
//!
//! Creates a fixed set of categories and a batch of random, plausible
//! expenses so the reports, insights and chart have something to show.

use chrono::{Duration, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use rusqlite::{params, OptionalExtension};
use tracing::info;

use crate::db::Database;
use crate::error::{Error, Result};

/// A demo category with its realistic amount range and sample descriptions
#[derive(Debug, Clone, Copy)]
pub struct SeedCategory {
    pub name: &'static str,
    pub essential: bool,
    /// Amount range in whole currency units (inclusive)
    pub min: u32,
    pub max: u32,
    pub descriptions: &'static [&'static str],
}

pub const SEED_CATEGORIES: &[SeedCategory] = &[
    SeedCategory {
        name: "Food",
        essential: true,
        min: 3,
        max: 12,
        descriptions: &["Lunch", "Dinner", "Groceries", "Supermarket"],
    },
    SeedCategory {
        name: "Rent",
        essential: true,
        min: 220,
        max: 260,
        descriptions: &["Monthly rent"],
    },
    SeedCategory {
        name: "Transportation",
        essential: true,
        min: 2,
        max: 8,
        descriptions: &["Bus", "Taxi", "Weekly transport"],
    },
    SeedCategory {
        name: "Leisure",
        essential: false,
        min: 4,
        max: 18,
        descriptions: &["Cinema", "Out with friends", "Coffee"],
    },
    SeedCategory {
        name: "Health",
        essential: true,
        min: 10,
        max: 40,
        descriptions: &["Doctor appointment", "Medicines"],
    },
    SeedCategory {
        name: "Education",
        essential: false,
        min: 16,
        max: 60,
        descriptions: &["Online course", "Book"],
    },
    SeedCategory {
        name: "Shopping",
        essential: false,
        min: 8,
        max: 70,
        descriptions: &["Clothes", "Shoes", "Impulse purchase"],
    },
];

/// Options for a seeding run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedOptions {
    pub count: usize,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            count: 200,
            start: NaiveDate::from_ymd_opt(2025, 11, 1).unwrap_or_default(),
            end: NaiveDate::from_ymd_opt(2026, 3, 31).unwrap_or_default(),
        }
    }
}

/// Summary of a seeding run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedResult {
    pub categories_created: usize,
    pub expenses_created: usize,
}

/// Insert demo categories (if missing) and random expenses
///
/// Everything is written in one transaction: either all rows land or none do.
pub fn seed_demo_data<R: Rng + ?Sized>(
    db: &Database,
    options: &SeedOptions,
    rng: &mut R,
) -> Result<SeedResult> {
    if options.end < options.start {
        return Err(Error::InvalidData(format!(
            "Seed end date {} is before start date {}",
            options.end, options.start
        )));
    }
    let span_days = (options.end - options.start).num_days();

    let mut conn = db.conn()?;
    let tx = conn.transaction()?;
    let mut result = SeedResult::default();

    let mut category_ids = Vec::with_capacity(SEED_CATEGORIES.len());
    for category in SEED_CATEGORIES {
        let existing: Option<i64> = tx
            .query_row(
                "SELECT id FROM categories WHERE name = ?",
                params![category.name],
                |row| row.get(0),
            )
            .optional()?;

        let id = match existing {
            Some(id) => id,
            None => {
                tx.execute(
                    "INSERT INTO categories (name, essential) VALUES (?, ?)",
                    params![category.name, category.essential],
                )?;
                result.categories_created += 1;
                tx.last_insert_rowid()
            }
        };
        category_ids.push((id, category));
    }

    {
        let mut stmt = tx.prepare(
            "INSERT INTO expenses (amount_cents, description, expense_date, category_id) VALUES (?, ?, ?, ?)",
        )?;

        for _ in 0..options.count {
            let Some((category_id, category)) = category_ids.choose(rng) else {
                break;
            };
            let amount = random_amount(rng, category);
            let description = category.descriptions.choose(rng).copied();
            let date = options.start + Duration::days(rng.gen_range(0..=span_days));

            stmt.execute(params![amount, description, date.to_string(), category_id])?;
            result.expenses_created += 1;
        }
    }

    tx.commit()?;

    info!(
        categories = result.categories_created,
        expenses = result.expenses_created,
        "Seeded demo data"
    );
    Ok(result)
}

/// Random amount in whole cents within the category's range
fn random_amount<R: Rng + ?Sized>(rng: &mut R, category: &SeedCategory) -> i64 {
    let low = i64::from(category.min) * 100;
    let high = i64::from(category.max) * 100;
    rng.gen_range(low..=high)
}
