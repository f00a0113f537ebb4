//! Category operations

use rusqlite::{params, OptionalExtension};
use tracing::info;

use super::Database;
use crate::error::{Error, Result};
use crate::models::{Category, NewCategory};

impl Database {
    /// Create a category, refusing names that already exist
    pub fn create_category(&self, category: &NewCategory) -> Result<Category> {
        let name = category.name.trim();
        if name.is_empty() {
            return Err(Error::InvalidData("Category name is required".to_string()));
        }

        self.with_conn(|conn| {
            let existing: Option<i64> = conn
                .query_row(
                    "SELECT id FROM categories WHERE name = ?",
                    params![name],
                    |row| row.get(0),
                )
                .optional()?;
            if existing.is_some() {
                return Err(Error::AlreadyExists("Category".to_string()));
            }

            match conn.execute(
                "INSERT INTO categories (name, essential) VALUES (?, ?)",
                params![name, category.essential],
            ) {
                Ok(_) => {}
                // Lost a race with a concurrent insert of the same name
                Err(rusqlite::Error::SqliteFailure(e, _))
                    if e.code == rusqlite::ErrorCode::ConstraintViolation =>
                {
                    return Err(Error::AlreadyExists("Category".to_string()));
                }
                Err(e) => return Err(e.into()),
            }

            let id = conn.last_insert_rowid();
            info!(id, category = name, "Created category");

            Ok(Category {
                id,
                name: name.to_string(),
                essential: category.essential,
            })
        })
    }

    /// List all categories ordered by name
    pub fn list_categories(&self) -> Result<Vec<Category>> {
        self.with_conn(|conn| {
            let mut stmt =
                conn.prepare("SELECT id, name, essential FROM categories ORDER BY name, id")?;
            let categories = stmt
                .query_map([], |row| {
                    Ok(Category {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        essential: row.get(2)?,
                    })
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(categories)
        })
    }

    /// Get a category by ID
    pub fn get_category(&self, id: i64) -> Result<Option<Category>> {
        self.with_conn(|conn| {
            let category = conn
                .query_row(
                    "SELECT id, name, essential FROM categories WHERE id = ?",
                    params![id],
                    |row| {
                        Ok(Category {
                            id: row.get(0)?,
                            name: row.get(1)?,
                            essential: row.get(2)?,
                        })
                    },
                )
                .optional()?;
            Ok(category)
        })
    }

    /// Find a category by exact name
    pub fn get_category_by_name(&self, name: &str) -> Result<Option<Category>> {
        self.with_conn(|conn| {
            let category = conn
                .query_row(
                    "SELECT id, name, essential FROM categories WHERE name = ?",
                    params![name],
                    |row| {
                        Ok(Category {
                            id: row.get(0)?,
                            name: row.get(1)?,
                            essential: row.get(2)?,
                        })
                    },
                )
                .optional()?;
            Ok(category)
        })
    }
}
