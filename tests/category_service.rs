#[cfg(test)]
mod tests {
    use agenda::db::db::Db;
    use agenda::libs::config::{CategorySeed, Config, DEFAULT_COLOR};
    use agenda::libs::context::AppContext;
    use agenda::services::{CategoryService, SeedReport};
    use test_context::{test_context, TestContext};

    struct CategoryTestContext {
        db: Db,
        config: Config,
    }

    impl TestContext for CategoryTestContext {
        fn setup() -> Self {
            let db = Db::open_in_memory().unwrap();
            db.initialize().unwrap();
            CategoryTestContext { db, config: Config::default() }
        }
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_seed_creates_default_taxonomy(ctx: &mut CategoryTestContext) {
        let service = CategoryService::new(&ctx.db, &ctx.config);

        let report = service.seed_defaults().unwrap();
        assert_eq!(report, SeedReport { categories: 2, subcategories: 8 });

        let categories = service.list_categories().unwrap();
        let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Perso", "Pro"]);

        let perso = service.find_category("Perso").unwrap().unwrap();
        assert_eq!(perso.color, "#3B82F6");
        let perso_subs = service.list_subcategories(perso.id).unwrap();
        let sub_names: Vec<&str> = perso_subs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(sub_names, vec!["Famille", "Loisirs", "Médical", "Sport"]);
        assert!(perso_subs.iter().all(|s| s.color == "#3B82F6" && s.category_id == perso.id));

        let pro = service.find_category("Pro").unwrap().unwrap();
        assert_eq!(pro.color, "#EF4444");
        assert_eq!(service.list_subcategories(pro.id).unwrap().len(), 4);
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_reseed_creates_nothing(ctx: &mut CategoryTestContext) {
        let service = CategoryService::new(&ctx.db, &ctx.config);
        service.seed_defaults().unwrap();

        let report = service.seed_defaults().unwrap();
        assert!(report.is_empty());
        assert_eq!(service.list_categories().unwrap().len(), 2);
        assert_eq!(service.list_all_subcategories().unwrap().len(), 8);
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_seed_skips_existing_category_by_name(ctx: &mut CategoryTestContext) {
        let service = CategoryService::new(&ctx.db, &ctx.config);
        let perso_id = service.create_category("Perso", "#000000").unwrap();

        let report = service.seed_defaults().unwrap();
        assert_eq!(report, SeedReport { categories: 1, subcategories: 4 });

        // The existing category keeps its color and gets no default subcategories
        let perso = service.get_category(perso_id).unwrap().unwrap();
        assert_eq!(perso.color, "#000000");
        assert!(service.list_subcategories(perso_id).unwrap().is_empty());
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_seed_uses_default_color_when_unset(ctx: &mut CategoryTestContext) {
        ctx.config.categories = vec![CategorySeed::new("Associatif", None, &["Bénévolat"])];
        let service = CategoryService::new(&ctx.db, &ctx.config);

        service.seed_defaults().unwrap();

        let category = service.find_category("Associatif").unwrap().unwrap();
        assert_eq!(category.color, DEFAULT_COLOR);
        let subcategories = service.list_subcategories(category.id).unwrap();
        assert_eq!(subcategories.len(), 1);
        assert_eq!(subcategories[0].color, DEFAULT_COLOR);
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_seed_with_repeated_name_creates_it_once(ctx: &mut CategoryTestContext) {
        ctx.config.categories.push(CategorySeed::new("Perso", None, &["Autre"]));
        let service = CategoryService::new(&ctx.db, &ctx.config);

        let report = service.seed_defaults().unwrap();
        assert_eq!(report, SeedReport { categories: 2, subcategories: 8 });

        let perso = service.find_category("Perso").unwrap().unwrap();
        assert_eq!(perso.color, "#3B82F6");
        let names: Vec<String> = service.list_subcategories(perso.id).unwrap().into_iter().map(|s| s.name).collect();
        assert!(!names.contains(&"Autre".to_string()));
    }

    #[test]
    fn test_context_opens_with_repeated_seed_name() {
        let mut config = Config::default();
        config.categories.push(CategorySeed::new("Perso", None, &["Autre"]));

        let app = AppContext::with_db(config, Db::open_in_memory().unwrap()).unwrap();
        assert_eq!(app.categories().list_categories().unwrap().len(), 2);
        app.close().unwrap();
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_create_and_list(ctx: &mut CategoryTestContext) {
        let service = CategoryService::new(&ctx.db, &ctx.config);

        let test_id = service.create_category("Test", "#FF5722").unwrap();
        assert!(test_id > 0);
        let sport_id = service.create_subcategory("Sport", test_id, "#10B981").unwrap();
        assert!(sport_id > 0);

        let sport = service.get_subcategory(sport_id).unwrap().unwrap();
        assert_eq!(sport.category_id, test_id);
        assert_eq!(sport.color, "#10B981");
        assert!(service.get_category(test_id + 100).unwrap().is_none());
        assert!(service.create_category("Test", "#FFFFFF").is_err());
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_all_subcategories_follow_category_order(ctx: &mut CategoryTestContext) {
        let service = CategoryService::new(&ctx.db, &ctx.config);
        let zeta = service.create_category("Zeta", "#111111").unwrap();
        let alpha = service.create_category("Alpha", "#222222").unwrap();
        service.create_subcategory("A-sub", zeta, "#111111").unwrap();
        service.create_subcategory("Z-sub", alpha, "#222222").unwrap();

        let names: Vec<String> = service.list_all_subcategories().unwrap().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Z-sub", "A-sub"]);
    }
}
