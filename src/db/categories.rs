use super::error::StoreResult;
use crate::libs::category::{Category, NewCategory};
use rusqlite::{params, Connection, OptionalExtension, Row};

pub(super) const SCHEMA_CATEGORIES: &str = "CREATE TABLE IF NOT EXISTS categories (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    color TEXT NOT NULL
)";
const INSERT_CATEGORY: &str = "INSERT INTO categories (name, color) VALUES (?1, ?2)";
const SELECT_CATEGORIES: &str = "SELECT id, name, color FROM categories";
const WHERE_ID: &str = "WHERE id = ?1";
const WHERE_NAME: &str = "WHERE name = ?1";
const ORDER_BY_NAME: &str = "ORDER BY name";

pub struct Categories<'a> {
    conn: &'a Connection,
}

impl<'a> Categories<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Stores a category and returns its id. Fails on a duplicate name.
    pub fn insert(&self, category: &NewCategory) -> StoreResult<i64> {
        self.conn.execute(INSERT_CATEGORY, params![category.name, category.color])?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, name = %category.name, "category inserted");
        Ok(id)
    }

    pub fn get_by_id(&self, id: i64) -> StoreResult<Option<Category>> {
        let category = self
            .conn
            .query_row(&format!("{} {}", SELECT_CATEGORIES, WHERE_ID), params![id], Self::from_row)
            .optional()?;
        Ok(category)
    }

    pub fn get_by_name(&self, name: &str) -> StoreResult<Option<Category>> {
        let category = self
            .conn
            .query_row(&format!("{} {}", SELECT_CATEGORIES, WHERE_NAME), params![name], Self::from_row)
            .optional()?;
        Ok(category)
    }

    /// All categories ordered by name with the store's default collation.
    pub fn list(&self) -> StoreResult<Vec<Category>> {
        let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_CATEGORIES, ORDER_BY_NAME))?;
        let category_iter = stmt.query_map([], Self::from_row)?;

        let mut categories = Vec::new();
        for category in category_iter {
            categories.push(category?);
        }
        Ok(categories)
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Category> {
        Ok(Category {
            id: row.get(0)?,
            name: row.get(1)?,
            color: row.get(2)?,
        })
    }
}
