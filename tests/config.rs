#[cfg(test)]
mod tests {
    use agenda::libs::config::{CategorySeed, Config, CONFIG_FILE_NAME, DEFAULT_COLOR, DEFAULT_DB_FILE};
    use agenda::libs::data_storage::DataStorage;
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            ConfigTestContext { temp_dir: TempDir::new().unwrap() }
        }
    }

    impl ConfigTestContext {
        fn storage(&self) -> DataStorage {
            DataStorage::at(self.temp_dir.path())
        }
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.db_file, DEFAULT_DB_FILE);
        assert_eq!(config.default_color, DEFAULT_COLOR);
        assert_eq!(config.upcoming_days, 7);
        assert_eq!(config.day_start_hour, 6);

        let names: Vec<&str> = config.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Perso", "Pro"]);
        assert_eq!(config.categories[0].subcategories, vec!["Médical", "Loisirs", "Famille", "Sport"]);
        assert_eq!(config.categories[1].subcategories, vec!["Réunion", "Formation", "Projet", "Administratif"]);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_gives_defaults(ctx: &mut ConfigTestContext) {
        let config = Config::read_in(ctx.storage()).unwrap();
        assert_eq!(Config::read_from(&ctx.temp_dir.path().join(CONFIG_FILE_NAME)).unwrap(), Config::default());
        assert_eq!(config.db_file, DEFAULT_DB_FILE);
        assert_eq!(config.categories, Config::default().categories);
        assert!(!ctx.temp_dir.path().join(CONFIG_FILE_NAME).exists());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_back(ctx: &mut ConfigTestContext) {
        let mut config = Config::read_in(ctx.storage()).unwrap();
        config.upcoming_days = 14;
        config.categories.push(CategorySeed::new("Associatif", None, &[]));

        let path = config.save().unwrap();
        assert_eq!(path, ctx.temp_dir.path().join(CONFIG_FILE_NAME));

        let loaded = Config::read_in(ctx.storage()).unwrap();
        assert_eq!(loaded.upcoming_days, 14);
        assert_eq!(loaded.categories.len(), 3);
        assert_eq!(loaded.categories[2].color, None);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_file_fills_defaults(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, r##"{ "db_file": "agenda.db", "categories": [{ "name": "Solo" }] }"##).unwrap();

        let config = Config::read_from(&path).unwrap();
        assert_eq!(config.db_file, "agenda.db");
        assert_eq!(config.default_color, DEFAULT_COLOR);
        assert_eq!(config.upcoming_days, 7);
        assert_eq!(config.categories, vec![CategorySeed::new("Solo", None, &[])]);
        assert_eq!(config.color_for(&config.categories[0]), DEFAULT_COLOR);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_file_is_an_error(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "{ not json").unwrap();

        assert!(Config::read_from(&path).is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_db_path_resolution(ctx: &mut ConfigTestContext) {
        let nested = ctx.temp_dir.path().join("nested");
        let mut config = Config::read_in(DataStorage::at(&nested)).unwrap();

        assert_eq!(config.db_path().unwrap(), nested.join(DEFAULT_DB_FILE));
        assert!(nested.exists());

        let absolute = ctx.temp_dir.path().join("elsewhere.db");
        config.db_file = absolute.display().to_string();
        assert_eq!(config.db_path().unwrap(), absolute);
    }
}
