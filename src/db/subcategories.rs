use super::error::StoreResult;
use crate::libs::subcategory::{NewSubcategory, Subcategory};
use rusqlite::{params, Connection, OptionalExtension, Row};

pub(super) const SCHEMA_SUBCATEGORIES: &str = "CREATE TABLE IF NOT EXISTS subcategories (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    category_id INTEGER NOT NULL,
    color TEXT NOT NULL,
    FOREIGN KEY (category_id) REFERENCES categories (id)
)";
const INSERT_SUBCATEGORY: &str = "INSERT INTO subcategories (name, category_id, color) VALUES (?1, ?2, ?3)";
const SELECT_SUBCATEGORIES: &str = "SELECT id, name, category_id, color FROM subcategories";
const SELECT_SUBCATEGORY_BY_ID: &str = "SELECT id, name, category_id, color FROM subcategories WHERE id = ?1";
const WHERE_CATEGORY: &str = "WHERE category_id = ?1 ORDER BY name";

pub struct Subcategories<'a> {
    conn: &'a Connection,
}

impl<'a> Subcategories<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn insert(&self, subcategory: &NewSubcategory) -> StoreResult<i64> {
        self.conn
            .execute(INSERT_SUBCATEGORY, params![subcategory.name, subcategory.category_id, subcategory.color])?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, category_id = subcategory.category_id, name = %subcategory.name, "subcategory inserted");
        Ok(id)
    }

    pub fn get_by_id(&self, id: i64) -> StoreResult<Option<Subcategory>> {
        let subcategory = self.conn.query_row(SELECT_SUBCATEGORY_BY_ID, params![id], Self::from_row).optional()?;
        Ok(subcategory)
    }

    /// Subcategories of one category, ordered by name.
    pub fn list_by_category(&self, category_id: i64) -> StoreResult<Vec<Subcategory>> {
        let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_SUBCATEGORIES, WHERE_CATEGORY))?;
        let subcategory_iter = stmt.query_map(params![category_id], Self::from_row)?;

        let mut subcategories = Vec::new();
        for subcategory in subcategory_iter {
            subcategories.push(subcategory?);
        }
        Ok(subcategories)
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Subcategory> {
        Ok(Subcategory {
            id: row.get(0)?,
            name: row.get(1)?,
            category_id: row.get(2)?,
            color: row.get(3)?,
        })
    }
}
