#[cfg(test)]
mod tests {
    use agenda::db::db::Db;
    use agenda::libs::appointment::NewAppointment;
    use agenda::libs::config::Config;
    use agenda::libs::context::AppContext;
    use chrono::{NaiveDate, NaiveDateTime};
    use test_context::{test_context, TestContext};

    struct AppointmentTestContext {
        app: AppContext,
        perso_id: i64,
        pro_id: i64,
    }

    impl TestContext for AppointmentTestContext {
        fn setup() -> Self {
            let app = AppContext::with_db(Config::default(), Db::open_in_memory().unwrap()).unwrap();
            let perso_id = app.categories().find_category("Perso").unwrap().unwrap().id;
            let pro_id = app.categories().find_category("Pro").unwrap().unwrap().id;
            AppointmentTestContext { app, perso_id, pro_id }
        }
    }

    fn at(date: &str, time: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date, time), "%Y-%m-%d %H:%M").unwrap()
    }

    fn day(date: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap()
    }

    impl AppointmentTestContext {
        fn add(&self, title: &str, date: &str, start: &str, end: &str) -> i64 {
            self.app
                .appointments()
                .create(&NewAppointment::new(title, at(date, start), at(date, end), self.perso_id))
                .unwrap()
        }
    }

    #[test_context(AppointmentTestContext)]
    #[test]
    fn test_doctor_appointment_scenario(ctx: &mut AppointmentTestContext) {
        let medical = ctx
            .app
            .categories()
            .list_subcategories(ctx.perso_id)
            .unwrap()
            .into_iter()
            .find(|s| s.name == "Médical")
            .unwrap();

        let id = ctx
            .app
            .appointments()
            .create(
                &NewAppointment::new("Rendez-vous médecin", at("2024-01-15", "10:30"), at("2024-01-15", "11:30"), ctx.perso_id)
                    .description("Contrôle annuel")
                    .subcategory(Some(medical.id)),
            )
            .unwrap();

        let found = ctx.app.appointments().list_by_date(day("2024-01-15")).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, id);
        assert_eq!(found[0].title, "Rendez-vous médecin");
        assert_eq!(found[0].category_id, ctx.perso_id);
        assert_eq!(found[0].subcategory_id, Some(medical.id));
        assert_eq!(found[0].duration(), chrono::Duration::hours(1));
    }

    #[test_context(AppointmentTestContext)]
    #[test]
    fn test_range_is_inclusive(ctx: &mut AppointmentTestContext) {
        ctx.add("Monday", "2024-01-15", "09:00", "10:00");
        let tuesday = ctx.add("Tuesday", "2024-01-16", "09:00", "10:00");
        ctx.add("Wednesday", "2024-01-17", "09:00", "10:00");

        let found = ctx.app.appointments().list_by_range(day("2024-01-16"), day("2024-01-16")).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, tuesday);

        let all = ctx.app.appointments().list_by_range(day("2024-01-15"), day("2024-01-17")).unwrap();
        assert_eq!(all.len(), 3);
    }

    #[test_context(AppointmentTestContext)]
    #[test]
    fn test_range_only_second_day(ctx: &mut AppointmentTestContext) {
        ctx.add("First", "2024-01-15", "09:00", "10:00");
        let second = ctx.add("Second", "2024-01-16", "09:00", "10:00");

        let found = ctx.app.appointments().list_by_range(day("2024-01-16"), day("2024-01-18")).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, second);
    }

    #[test_context(AppointmentTestContext)]
    #[test]
    fn test_range_is_sorted_and_empty_when_inverted(ctx: &mut AppointmentTestContext) {
        ctx.add("Afternoon", "2024-01-16", "15:00", "16:00");
        ctx.add("Morning", "2024-01-16", "08:00", "09:00");
        ctx.add("Day before", "2024-01-15", "20:00", "21:00");

        let titles: Vec<String> = ctx
            .app
            .appointments()
            .list_by_range(day("2024-01-15"), day("2024-01-16"))
            .unwrap()
            .into_iter()
            .map(|a| a.title)
            .collect();
        assert_eq!(titles, vec!["Day before", "Morning", "Afternoon"]);

        assert!(ctx.app.appointments().list_by_range(day("2024-01-16"), day("2024-01-15")).unwrap().is_empty());
    }

    #[test_context(AppointmentTestContext)]
    #[test]
    fn test_upcoming_window(ctx: &mut AppointmentTestContext) {
        ctx.add("Yesterday", "2024-01-14", "10:00", "11:00");
        ctx.add("Today", "2024-01-15", "10:00", "11:00");
        ctx.add("Last day", "2024-01-22", "10:00", "11:00");
        ctx.add("Too far", "2024-01-23", "10:00", "11:00");

        let titles: Vec<String> = ctx
            .app
            .appointments()
            .upcoming(day("2024-01-15"), 7)
            .unwrap()
            .into_iter()
            .map(|a| a.title)
            .collect();
        assert_eq!(titles, vec!["Today", "Last day"]);

        assert_eq!(ctx.app.appointments().upcoming(day("2024-01-15"), 0).unwrap().len(), 1);
    }

    #[test_context(AppointmentTestContext)]
    #[test]
    fn test_update_moves_appointment(ctx: &mut AppointmentTestContext) {
        let id = ctx.add("Meeting", "2024-01-15", "10:00", "11:00");
        let appointments = ctx.app.appointments();

        let mut appointment = appointments.get(id).unwrap().unwrap();
        appointment.category_id = ctx.pro_id;
        appointment.start = at("2024-01-18", "14:00");
        appointment.end = at("2024-01-18", "15:30");
        assert!(appointments.update(&appointment).unwrap());

        let moved = appointments.list_by_date(day("2024-01-18")).unwrap();
        assert_eq!(moved.len(), 1);
        assert_eq!(moved[0].category_id, ctx.pro_id);
        assert_eq!(moved[0].start, at("2024-01-18", "14:00"));
        assert_eq!(moved[0].end, at("2024-01-18", "15:30"));
        assert!(appointments.list_by_date(day("2024-01-15")).unwrap().is_empty());
    }

    #[test_context(AppointmentTestContext)]
    #[test]
    fn test_missing_ids(ctx: &mut AppointmentTestContext) {
        let appointments = ctx.app.appointments();
        let ghost = NewAppointment::new("Ghost", at("2024-01-15", "10:00"), at("2024-01-15", "11:00"), ctx.perso_id).with_id(999);

        assert!(!appointments.update(&ghost).unwrap());
        assert!(!appointments.delete(999).unwrap());
        assert!(appointments.get(999).unwrap().is_none());
    }

    #[test_context(AppointmentTestContext)]
    #[test]
    fn test_creation_is_not_validated(ctx: &mut AppointmentTestContext) {
        let appointments = ctx.app.appointments();
        let id = appointments
            .create(&NewAppointment::new("", at("2024-01-15", "11:00"), at("2024-01-15", "10:00"), 4242))
            .unwrap();

        let stored = appointments.get(id).unwrap().unwrap();
        assert_eq!(stored.title, "");
        assert_eq!(stored.category_id, 4242);
        assert!(stored.duration() < chrono::Duration::zero());
    }

    #[test_context(AppointmentTestContext)]
    #[test]
    fn test_conflict_detection(ctx: &mut AppointmentTestContext) {
        let existing = ctx.add("Existing", "2024-01-15", "10:00", "11:00");
        let appointments = ctx.app.appointments();

        assert!(appointments.has_conflict(at("2024-01-15", "10:30"), at("2024-01-15", "11:30"), None).unwrap());
        assert!(appointments.has_conflict(at("2024-01-15", "09:00"), at("2024-01-15", "12:00"), None).unwrap());
        assert!(appointments.has_conflict(at("2024-01-15", "10:15"), at("2024-01-15", "10:45"), None).unwrap());
        // Touching intervals do not overlap
        assert!(!appointments.has_conflict(at("2024-01-15", "11:00"), at("2024-01-15", "12:00"), None).unwrap());
        assert!(!appointments.has_conflict(at("2024-01-15", "09:00"), at("2024-01-15", "10:00"), None).unwrap());
        // Another day
        assert!(!appointments.has_conflict(at("2024-01-16", "10:00"), at("2024-01-16", "11:00"), None).unwrap());
        // Editing the appointment itself
        assert!(!appointments.has_conflict(at("2024-01-15", "10:30"), at("2024-01-15", "11:30"), Some(existing)).unwrap());
    }

    #[test_context(AppointmentTestContext)]
    #[test]
    fn test_conflicts_lists_every_overlap(ctx: &mut AppointmentTestContext) {
        let first = ctx.add("First", "2024-01-15", "09:00", "10:00");
        let second = ctx.add("Second", "2024-01-15", "09:30", "11:00");
        ctx.add("Third", "2024-01-15", "13:00", "14:00");

        let conflicts = ctx.app.appointments().conflicts(at("2024-01-15", "09:45"), at("2024-01-15", "10:30"), None).unwrap();
        let ids: Vec<i64> = conflicts.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[test_context(AppointmentTestContext)]
    #[test]
    fn test_conflict_only_checks_start_date(ctx: &mut AppointmentTestContext) {
        ctx.add("Early", "2024-01-16", "00:00", "01:00");

        // Crosses midnight into the early appointment but only the 15th is examined
        let crossing = ctx.app.appointments().has_conflict(at("2024-01-15", "23:30"), at("2024-01-16", "00:30"), None).unwrap();
        assert!(!crossing);
    }

    #[test_context(AppointmentTestContext)]
    #[test]
    fn test_list_by_category_and_subcategory(ctx: &mut AppointmentTestContext) {
        let sport = ctx
            .app
            .categories()
            .list_subcategories(ctx.perso_id)
            .unwrap()
            .into_iter()
            .find(|s| s.name == "Sport")
            .unwrap();
        let appointments = ctx.app.appointments();
        appointments
            .create(&NewAppointment::new("Tennis", at("2024-01-20", "10:00"), at("2024-01-20", "12:00"), ctx.perso_id).subcategory(Some(sport.id)))
            .unwrap();
        appointments
            .create(&NewAppointment::new("Formation", at("2024-01-19", "09:00"), at("2024-01-19", "17:00"), ctx.pro_id))
            .unwrap();

        assert_eq!(appointments.list_by_category(ctx.pro_id).unwrap()[0].title, "Formation");
        assert_eq!(appointments.list_by_subcategory(sport.id).unwrap()[0].title, "Tennis");
        assert_eq!(appointments.list_by_category(ctx.perso_id).unwrap().len(), 1);
    }
}
