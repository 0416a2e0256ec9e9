/// Every user-facing message of the application.
///
/// Text lives in the `Display` implementation in `display.rs`; callers only pick a
/// variant and pass its parameters.
#[derive(Debug, Clone)]
pub enum Message {
    // === SETUP MESSAGES ===
    ConfigSaved(String),         // path
    ConfigCurrent(String),       // path
    DatabaseReady(String),       // path
    TaxonomySeeded(usize, usize), // categories, subcategories

    // === CATEGORY MESSAGES ===
    CategoriesHeader,
    NoCategoriesFound,
    CategoryCreated(String),
    CategoryAlreadyExists(String),
    CategoryNotFound(String),
    SubcategoryCreated(String, String), // subcategory, category
    SubcategoriesHeader(String),        // category
    NoSubcategoriesFound(String),       // category
    SubcategoryNotFound(String, String), // subcategory, category

    // === APPOINTMENT MESSAGES ===
    AppointmentCreated(i64),
    AppointmentUpdated(i64),
    AppointmentDeleted(i64),
    AppointmentNotFound(i64),
    AppointmentHeader(i64),
    AppointmentsForDate(String),
    AppointmentsForRange(String, String),
    NoAppointmentsForDate(String),
    NoAppointmentsInRange(String, String),
    UpcomingHeader(u32),
    NoUpcomingAppointments(u32),
    TimelineHeader(String),
    MonthHeader(String),
    ConfirmDeleteAppointment(String),
    OperationCancelled,

    // === CONFLICT MESSAGES ===
    ConflictsFound(usize),
    NoConflicts,
    ConfirmSaveDespiteConflicts,
    EndBeforeStart(String, String), // start, end

    // === INPUT MESSAGES ===
    TitleRequired,
    InvalidDateFormat(String),
    InvalidTimeFormat(String),
    InvalidMonthFormat(String),
    NoChangesProvided,
    PromptTitle,

    // === ERROR MESSAGES ===
    CommandFailed(String),
}
