//! Display implementation for agenda messages.
//!
//! All message text is defined here, in one match, so wording stays consistent across
//! commands. Parameters are interpolated as given; dates arrive already formatted.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === SETUP MESSAGES ===
            Message::ConfigSaved(path) => format!("Configuration saved to {}", path),
            Message::ConfigCurrent(path) => format!("Current configuration ({}):", path),
            Message::DatabaseReady(path) => format!("Database ready: {}", path),
            Message::TaxonomySeeded(categories, subcategories) => {
                format!("Default taxonomy created: {} categories, {} subcategories", categories, subcategories)
            }

            // === CATEGORY MESSAGES ===
            Message::CategoriesHeader => "Categories:".to_string(),
            Message::NoCategoriesFound => "No categories found".to_string(),
            Message::CategoryCreated(name) => format!("Category '{}' created", name),
            Message::CategoryAlreadyExists(name) => format!("Category '{}' already exists", name),
            Message::CategoryNotFound(name) => format!("Category '{}' not found", name),
            Message::SubcategoryCreated(name, category) => format!("Subcategory '{}' created under '{}'", name, category),
            Message::SubcategoriesHeader(category) => format!("Subcategories of '{}':", category),
            Message::NoSubcategoriesFound(category) => format!("Category '{}' has no subcategories", category),
            Message::SubcategoryNotFound(name, category) => format!("Subcategory '{}' not found under '{}'", name, category),

            // === APPOINTMENT MESSAGES ===
            Message::AppointmentCreated(id) => format!("Appointment #{} created", id),
            Message::AppointmentUpdated(id) => format!("Appointment #{} updated", id),
            Message::AppointmentDeleted(id) => format!("Appointment #{} deleted", id),
            Message::AppointmentNotFound(id) => format!("Appointment #{} not found", id),
            Message::AppointmentHeader(id) => format!("Appointment #{}:", id),
            Message::AppointmentsForDate(date) => format!("Appointments for {}:", date),
            Message::AppointmentsForRange(from, to) => format!("Appointments from {} to {}:", from, to),
            Message::NoAppointmentsForDate(date) => format!("No appointments on {}", date),
            Message::NoAppointmentsInRange(from, to) => format!("No appointments between {} and {}", from, to),
            Message::UpcomingHeader(days) => format!("Upcoming appointments (next {} days):", days),
            Message::NoUpcomingAppointments(days) => format!("No appointments in the next {} days", days),
            Message::TimelineHeader(date) => format!("Timeline for {}:", date),
            Message::MonthHeader(month) => format!("Calendar for {}:", month),
            Message::ConfirmDeleteAppointment(title) => format!("Delete appointment '{}'?", title),
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === CONFLICT MESSAGES ===
            Message::ConflictsFound(count) => format!("{} overlapping appointment(s):", count),
            Message::NoConflicts => "No overlapping appointments".to_string(),
            Message::ConfirmSaveDespiteConflicts => "Save anyway?".to_string(),
            Message::EndBeforeStart(start, end) => format!("End time {} is before start time {}", end, start),

            // === INPUT MESSAGES ===
            Message::TitleRequired => "Title is required".to_string(),
            Message::InvalidDateFormat(input) => format!("Invalid date '{}' (expected DD/MM/YYYY, YYYY-MM-DD or 'today')", input),
            Message::InvalidTimeFormat(input) => format!("Invalid time '{}' (expected HH:MM)", input),
            Message::InvalidMonthFormat(input) => format!("Invalid month '{}' (expected YYYY-MM)", input),
            Message::NoChangesProvided => "Nothing to change: no field was given".to_string(),
            Message::PromptTitle => "Title".to_string(),

            // === ERROR MESSAGES ===
            Message::CommandFailed(error) => format!("Command failed: {}", error),
        };
        write!(f, "{}", text)
    }
}
