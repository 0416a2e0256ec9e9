//! Database layer for the agenda application.
//!
//! A single SQLite file holds three tables: `categories`, `subcategories` and
//! `appointments`. [`db::Db`] owns the only connection; the per-table handles borrow
//! it, so every read and write in the application goes through this module.
//!
//! Each write is a single auto-committed statement. Lookups that find nothing return
//! `None` (or `false` for updates and deletes) rather than an error; storage faults
//! surface as [`StoreError`].
//!
//! ## Usage
//!
//! ```rust
//! use agenda::db::db::Db;
//! use agenda::libs::category::NewCategory;
//!
//! let db = Db::open_in_memory()?;
//! db.initialize()?;
//! let id = db.categories().insert(&NewCategory::new("Perso", "#3B82F6"))?;
//! assert!(db.categories().get_by_id(id)?.is_some());
//! db.close()?;
//! # Ok::<(), agenda::db::StoreError>(())
//! ```

/// Connection ownership and schema creation.
pub mod db;

pub mod error;

/// Appointment CRUD and day queries.
pub mod appointments;

pub mod categories;

pub mod subcategories;

pub use error::{StoreError, StoreResult};
