//! Appointment management.
//!
//! Creation and updates are stored as given: the service does not check that the
//! title is non-empty, that the category exists or that `end` follows `start`.
//! Range queries iterate day by day over the per-day lookup. The conflict check scans
//! the candidate's start date.

use crate::db::db::Db;
use crate::db::StoreResult;
use crate::libs::appointment::{Appointment, NewAppointment};
use chrono::{Days, NaiveDate, NaiveDateTime};

pub struct AppointmentService<'a> {
    db: &'a Db,
}

impl<'a> AppointmentService<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { db }
    }

    pub fn create(&self, appointment: &NewAppointment) -> StoreResult<i64> {
        self.db.appointments().insert(appointment)
    }

    pub fn get(&self, id: i64) -> StoreResult<Option<Appointment>> {
        self.db.appointments().get_by_id(id)
    }

    pub fn list_by_date(&self, date: NaiveDate) -> StoreResult<Vec<Appointment>> {
        self.db.appointments().list_by_date(date)
    }

    /// Appointments starting between `start_date` and `end_date`, both inclusive,
    /// ordered by start. Empty when `start_date` is after `end_date`.
    pub fn list_by_range(&self, start_date: NaiveDate, end_date: NaiveDate) -> StoreResult<Vec<Appointment>> {
        let mut appointments = Vec::new();
        for date in start_date.iter_days().take_while(|date| *date <= end_date) {
            appointments.extend(self.list_by_date(date)?);
        }

        appointments.sort_by_key(|appointment| appointment.start);
        Ok(appointments)
    }

    /// Appointments from `today` through `today + days_ahead`.
    pub fn upcoming(&self, today: NaiveDate, days_ahead: u32) -> StoreResult<Vec<Appointment>> {
        let end_date = today.checked_add_days(Days::new(days_ahead.into())).unwrap_or(NaiveDate::MAX);
        self.list_by_range(today, end_date)
    }

    pub fn list_by_category(&self, category_id: i64) -> StoreResult<Vec<Appointment>> {
        self.db.appointments().list_by_category(category_id)
    }

    pub fn list_by_subcategory(&self, subcategory_id: i64) -> StoreResult<Vec<Appointment>> {
        self.db.appointments().list_by_subcategory(subcategory_id)
    }

    /// Returns `false` when the id does not exist.
    pub fn update(&self, appointment: &Appointment) -> StoreResult<bool> {
        self.db.appointments().update(appointment)
    }

    /// Returns `false` when the id does not exist.
    pub fn delete(&self, id: i64) -> StoreResult<bool> {
        self.db.appointments().delete(id)
    }

    /// Appointments on `start`'s date whose interval intersects `[start, end)`.
    ///
    /// Only the candidate's start date is examined: intervals crossing midnight are not
    /// matched against the following day.
    pub fn conflicts(&self, start: NaiveDateTime, end: NaiveDateTime, exclude_id: Option<i64>) -> StoreResult<Vec<Appointment>> {
        let conflicts = self
            .list_by_date(start.date())?
            .into_iter()
            .filter(|appointment| Some(appointment.id) != exclude_id)
            .filter(|appointment| appointment.overlaps(start, end))
            .collect();
        Ok(conflicts)
    }

    pub fn has_conflict(&self, start: NaiveDateTime, end: NaiveDateTime, exclude_id: Option<i64>) -> StoreResult<bool> {
        Ok(!self.conflicts(start, end, exclude_id)?.is_empty())
    }
}
