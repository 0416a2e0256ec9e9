use super::appointments::{Appointments, SCHEMA_APPOINTMENTS};
use super::categories::{Categories, SCHEMA_CATEGORIES};
use super::error::StoreResult;
use super::subcategories::{Subcategories, SCHEMA_SUBCATEGORIES};
use crate::libs::config::Config;
use rusqlite::Connection;
use std::path::Path;

/// Owner of the single connection to the calendar database.
///
/// Table access goes through the borrowing handles returned by [`Db::categories`],
/// [`Db::subcategories`] and [`Db::appointments`]. The connection is released by
/// [`Db::close`] or, on early returns, when the `Db` is dropped.
pub struct Db {
    conn: Connection,
}

impl Db {
    /// Opens the database file named by the configuration.
    pub fn new(config: &Config) -> StoreResult<Db> {
        let db_file_path = config.db_path()?;
        Self::open(db_file_path)
    }

    /// Opens `path`, creating the file if it does not exist.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Db> {
        let conn = Connection::open(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "database opened");

        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> StoreResult<Db> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn)
    }

    /// Appointments may reference categories and subcategories that no longer exist,
    /// so foreign keys are never enforced whatever the SQLite build default is.
    fn with_connection(conn: Connection) -> StoreResult<Db> {
        conn.pragma_update(None, "foreign_keys", "OFF")?;
        Ok(Db { conn })
    }

    /// Creates the tables that do not exist yet. Safe to call on every start.
    pub fn initialize(&self) -> StoreResult<()> {
        self.conn.execute(SCHEMA_CATEGORIES, [])?;
        self.conn.execute(SCHEMA_SUBCATEGORIES, [])?;
        self.conn.execute(SCHEMA_APPOINTMENTS, [])?;
        Ok(())
    }

    pub fn categories(&self) -> Categories<'_> {
        Categories::new(&self.conn)
    }

    pub fn subcategories(&self) -> Subcategories<'_> {
        Subcategories::new(&self.conn)
    }

    pub fn appointments(&self) -> Appointments<'_> {
        Appointments::new(&self.conn)
    }

    /// Releases the connection, reporting a failure to close it.
    pub fn close(self) -> StoreResult<()> {
        self.conn.close().map_err(|(_, e)| e)?;
        tracing::debug!("database closed");
        Ok(())
    }
}
