//! Application configuration.
//!
//! The configuration replaces process-wide constants: it is read once at startup and
//! handed by reference to the components that need it (database location, default
//! taxonomy and colors, view settings).
//!
//! ## Storage
//!
//! Stored as pretty-printed JSON in `config.json` inside the platform data directory
//! resolved by [`DataStorage`]. A missing file means "use the defaults"; fields absent
//! from an existing file fall back to their default values.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use agenda::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("Database: {}", config.db_path()?.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_DB_FILE: &str = "calendar_data.db";
pub const DEFAULT_COLOR: &str = "#6B7280";
pub const DEFAULT_UPCOMING_DAYS: u32 = 7;
pub const DEFAULT_DAY_START_HOUR: u32 = 6;

/// One entry of the default taxonomy created on first run.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CategorySeed {
    pub name: String,
    /// Falls back to [`Config::default_color`] when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub subcategories: Vec<String>,
}

impl CategorySeed {
    pub fn new(name: &str, color: Option<&str>, subcategories: &[&str]) -> Self {
        CategorySeed {
            name: name.to_string(),
            color: color.map(str::to_string),
            subcategories: subcategories.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Database file name, relative to the data directory unless absolute.
    pub db_file: String,
    pub default_color: String,
    pub categories: Vec<CategorySeed>,
    pub upcoming_days: u32,
    /// First hour shown by the day timeline.
    pub day_start_hour: u32,
    #[serde(skip)]
    storage: Option<DataStorage>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            db_file: DEFAULT_DB_FILE.to_string(),
            default_color: DEFAULT_COLOR.to_string(),
            categories: vec![
                CategorySeed::new("Perso", Some("#3B82F6"), &["Médical", "Loisirs", "Famille", "Sport"]),
                CategorySeed::new("Pro", Some("#EF4444"), &["Réunion", "Formation", "Projet", "Administratif"]),
            ],
            upcoming_days: DEFAULT_UPCOMING_DAYS,
            day_start_hour: DEFAULT_DAY_START_HOUR,
            storage: None,
        }
    }
}

impl Config {
    /// Reads the configuration from the platform data directory.
    pub fn read() -> Result<Config> {
        Self::read_in(DataStorage::new())
    }

    /// Reads the configuration from `config.json` under `storage`, remembering the
    /// directory so that relative database paths resolve against it.
    pub fn read_in(storage: DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        let mut config = Self::read_from(&config_file_path)?;
        config.storage = Some(storage);
        Ok(config)
    }

    /// Reads a configuration file; a missing file yields the defaults.
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<PathBuf> {
        let config_file_path = self.storage().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)?;
        Ok(config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Full path of the database file, creating the data directory if needed.
    pub fn db_path(&self) -> io::Result<PathBuf> {
        self.storage().get_path(&self.db_file)
    }

    /// Color used when seeding `seed`.
    pub fn color_for<'a>(&'a self, seed: &'a CategorySeed) -> &'a str {
        seed.color.as_deref().unwrap_or(&self.default_color)
    }

    fn storage(&self) -> DataStorage {
        self.storage.clone().unwrap_or_default()
    }
}
