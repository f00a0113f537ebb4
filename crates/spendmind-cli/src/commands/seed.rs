//! Demo data command

use anyhow::{Context, Result};
use spendmind_core::{db::Database, seed_demo_data, SeedOptions, SeedResult};

use super::parse_date_arg;

pub fn cmd_seed(db: &Database, count: usize, from: &str, to: &str) -> Result<SeedResult> {
    let options = SeedOptions {
        count,
        start: parse_date_arg(from, "--from")?,
        end: parse_date_arg(to, "--to")?,
    };

    println!(
        "🌱 Seeding {} expenses between {} and {}...",
        options.count, options.start, options.end
    );

    let result = seed_demo_data(db, &options, &mut rand::thread_rng())
        .context("Failed to seed demo data")?;

    println!("   Categories created: {}", result.categories_created);
    println!("   Expenses created:   {}", result.expenses_created);
    println!("✅ Demo data ready");

    Ok(result)
}
