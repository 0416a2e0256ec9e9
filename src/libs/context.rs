use super::config::Config;
use super::messages::Message;
use super::view::TaxonomyNames;
use crate::db::db::Db;
use crate::db::StoreResult;
use crate::msg_debug;
use crate::services::{AppointmentService, CategoryService, SeedReport};

/// Everything a command needs for one run: the configuration and the open database.
///
/// Opening initializes the schema and seeds the default taxonomy. The database is
/// released by [`AppContext::close`], or when the context is dropped on an error path.
pub struct AppContext {
    pub config: Config,
    db: Db,
    seeded: SeedReport,
}

impl AppContext {
    pub fn open(config: Config) -> StoreResult<Self> {
        let db = Db::new(&config)?;
        Self::with_db(config, db)
    }

    /// Builds the context around an already opened database.
    pub fn with_db(config: Config, db: Db) -> StoreResult<Self> {
        db.initialize()?;
        let seeded = CategoryService::new(&db, &config).seed_defaults()?;
        if !seeded.is_empty() {
            msg_debug!(Message::TaxonomySeeded(seeded.categories, seeded.subcategories));
        }

        Ok(AppContext { config, db, seeded })
    }

    /// What seeding created while opening.
    pub fn seeded(&self) -> SeedReport {
        self.seeded
    }

    pub fn categories(&self) -> CategoryService<'_> {
        CategoryService::new(&self.db, &self.config)
    }

    pub fn appointments(&self) -> AppointmentService<'_> {
        AppointmentService::new(&self.db)
    }

    pub fn names(&self) -> StoreResult<TaxonomyNames> {
        let categories = self.categories();
        Ok(TaxonomyNames::new(&categories.list_categories()?, &categories.list_all_subcategories()?))
    }

    pub fn close(self) -> StoreResult<()> {
        self.db.close()
    }
}
