//! Category command implementations

use anyhow::{Context, Result};
use spendmind_core::db::Database;
use spendmind_core::models::{Category, NewCategory};

pub fn cmd_categories_list(db: &Database) -> Result<()> {
    let categories = db.list_categories()?;

    if categories.is_empty() {
        println!("No categories yet. Add one with:");
        println!("  spendmind categories add Food");
        return Ok(());
    }

    println!();
    println!("🏷️  Categories");
    println!("   ─────────────────────────────────────────");

    for category in categories {
        let marker = if category.essential { "essential" } else { "" };
        println!("   {:>4} │ {:<24} │ {}", category.id, category.name, marker);
    }

    Ok(())
}

pub fn cmd_categories_add(db: &Database, name: &str, essential: bool) -> Result<Category> {
    let category = db
        .create_category(&NewCategory::new(name).essential(essential))
        .with_context(|| format!("Failed to add category '{}'", name))?;

    println!("✅ Added category '{}' (id {})", category.name, category.id);
    Ok(category)
}

/// Resolve a category given by id or by exact name
///
/// Numeric input is tried as an id first, then as a name, so a category
/// called "2024" stays reachable.
pub fn resolve_category(db: &Database, name_or_id: &str) -> Result<Category> {
    let by_id = match name_or_id.parse::<i64>() {
        Ok(id) => db.get_category(id)?,
        Err(_) => None,
    };
    let found = match by_id {
        Some(category) => Some(category),
        None => db.get_category_by_name(name_or_id)?,
    };

    found.ok_or_else(|| anyhow::anyhow!("Category not found: {}", name_or_id))
}
