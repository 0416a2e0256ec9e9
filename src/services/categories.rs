//! Category and subcategory management.
//!
//! Apart from seeding, every operation forwards to the data access layer without
//! extra validation.

use crate::db::db::Db;
use crate::db::StoreResult;
use crate::libs::category::{Category, NewCategory};
use crate::libs::config::Config;
use crate::libs::subcategory::{NewSubcategory, Subcategory};
use std::collections::HashSet;

/// What a seeding pass created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub categories: usize,
    pub subcategories: usize,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool {
        self.categories == 0 && self.subcategories == 0
    }
}

pub struct CategoryService<'a> {
    db: &'a Db,
    config: &'a Config,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a Db, config: &'a Config) -> Self {
        Self { db, config }
    }

    /// Creates the configured categories that do not exist yet, each followed by its
    /// subcategories in the category's color.
    ///
    /// Categories are matched by name, and a name listed twice is only created once.
    /// Subcategories are only created together with a newly created category, so an
    /// existing category never receives new ones.
    pub fn seed_defaults(&self) -> StoreResult<SeedReport> {
        let mut existing: HashSet<String> = self.list_categories()?.into_iter().map(|c| c.name).collect();
        let mut report = SeedReport::default();

        for seed in &self.config.categories {
            if !existing.insert(seed.name.clone()) {
                continue;
            }

            let color = self.config.color_for(seed);
            let category_id = self.create_category(&seed.name, color)?;
            report.categories += 1;

            for subcategory_name in &seed.subcategories {
                self.create_subcategory(subcategory_name, category_id, color)?;
                report.subcategories += 1;
            }
        }

        if !report.is_empty() {
            tracing::info!(categories = report.categories, subcategories = report.subcategories, "default taxonomy seeded");
        }
        Ok(report)
    }

    pub fn create_category(&self, name: &str, color: &str) -> StoreResult<i64> {
        self.db.categories().insert(&NewCategory::new(name, color))
    }

    pub fn get_category(&self, id: i64) -> StoreResult<Option<Category>> {
        self.db.categories().get_by_id(id)
    }

    pub fn find_category(&self, name: &str) -> StoreResult<Option<Category>> {
        self.db.categories().get_by_name(name)
    }

    pub fn list_categories(&self) -> StoreResult<Vec<Category>> {
        self.db.categories().list()
    }

    pub fn create_subcategory(&self, name: &str, category_id: i64, color: &str) -> StoreResult<i64> {
        self.db.subcategories().insert(&NewSubcategory::new(name, category_id, color))
    }

    pub fn get_subcategory(&self, id: i64) -> StoreResult<Option<Subcategory>> {
        self.db.subcategories().get_by_id(id)
    }

    pub fn list_subcategories(&self, category_id: i64) -> StoreResult<Vec<Subcategory>> {
        self.db.subcategories().list_by_category(category_id)
    }

    /// Every subcategory, grouped by category in category name order.
    pub fn list_all_subcategories(&self) -> StoreResult<Vec<Subcategory>> {
        let mut subcategories = Vec::new();
        for category in self.list_categories()? {
            subcategories.extend(self.list_subcategories(category.id)?);
        }
        Ok(subcategories)
    }
}
