//! Category repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide storage primitives over the `categories` collection.
//!
//! # Invariants
//! - List queries are always ordered by `display_order ASC, id ASC`.
//! - `next_category_id` returns `max(id) + 1`, or 1 for an empty collection.

use crate::model::category::{Category, CategoryId};
use crate::repo::RepoResult;
use rusqlite::{params, Connection, Row};

const CATEGORY_SELECT_SQL: &str = "SELECT
    id,
    name,
    color,
    icon,
    display_order
FROM categories";

/// Repository interface for the category collection.
pub trait CategoryRepository {
    /// Inserts a fully assembled record (service- or seed-assigned id).
    fn insert_category(&self, category: &Category) -> RepoResult<()>;
    /// Replaces the record with the matching id; `false` when absent.
    fn update_category(&self, category: &Category) -> RepoResult<bool>;
    fn get_category(&self, id: CategoryId) -> RepoResult<Option<Category>>;
    fn list_categories(&self) -> RepoResult<Vec<Category>>;
    /// Removes the record with the matching id and returns it.
    fn delete_category(&self, id: CategoryId) -> RepoResult<Option<Category>>;
    fn next_category_id(&self) -> RepoResult<CategoryId>;
    fn category_count(&self) -> RepoResult<i64>;
}

/// SQLite-backed category repository.
pub struct SqliteCategoryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCategoryRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CategoryRepository for SqliteCategoryRepository<'_> {
    fn insert_category(&self, category: &Category) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO categories (id, name, color, icon, display_order)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                category.id,
                category.name.as_str(),
                category.color.as_str(),
                category.icon.as_str(),
                category.order,
            ],
        )?;

        Ok(())
    }

    fn update_category(&self, category: &Category) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "UPDATE categories
             SET
                name = ?1,
                color = ?2,
                icon = ?3,
                display_order = ?4
             WHERE id = ?5;",
            params![
                category.name.as_str(),
                category.color.as_str(),
                category.icon.as_str(),
                category.order,
                category.id,
            ],
        )?;

        Ok(changed > 0)
    }

    fn get_category(&self, id: CategoryId) -> RepoResult<Option<Category>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CATEGORY_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_category_row(row)?));
        }

        Ok(None)
    }

    fn list_categories(&self) -> RepoResult<Vec<Category>> {
        let mut stmt = self.conn.prepare(&format!(
            "{CATEGORY_SELECT_SQL} ORDER BY display_order ASC, id ASC;"
        ))?;

        let mut rows = stmt.query([])?;
        let mut categories = Vec::new();
        while let Some(row) = rows.next()? {
            categories.push(parse_category_row(row)?);
        }

        Ok(categories)
    }

    fn delete_category(&self, id: CategoryId) -> RepoResult<Option<Category>> {
        let Some(category) = self.get_category(id)? else {
            return Ok(None);
        };

        self.conn
            .execute("DELETE FROM categories WHERE id = ?1;", params![id])?;

        Ok(Some(category))
    }

    fn next_category_id(&self) -> RepoResult<CategoryId> {
        let next = self.conn.query_row(
            "SELECT COALESCE(MAX(id), 0) + 1 FROM categories;",
            [],
            |row| row.get::<_, i64>(0),
        )?;
        Ok(next)
    }

    fn category_count(&self) -> RepoResult<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM categories;", [], |row| {
                row.get::<_, i64>(0)
            })?;
        Ok(count)
    }
}

fn parse_category_row(row: &Row<'_>) -> RepoResult<Category> {
    Ok(Category {
        id: row.get("id")?,
        name: row.get("name")?,
        color: row.get("color")?,
        icon: row.get("icon")?,
        order: row.get("display_order")?,
    })
}
