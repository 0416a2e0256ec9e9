//! Appointment records.
//!
//! An appointment is a titled time interval linked to a category and, optionally, to
//! one of that category's subcategories. Nothing enforces `end >= start`: records with
//! an inverted interval are stored as given and report a negative [`Appointment::duration`].

use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::fmt;

/// A stored appointment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub category_id: i64,
    pub subcategory_id: Option<i64>,
}

/// An appointment that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppointment {
    pub title: String,
    pub description: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub category_id: i64,
    pub subcategory_id: Option<i64>,
}

impl NewAppointment {
    pub fn new(title: &str, start: NaiveDateTime, end: NaiveDateTime, category_id: i64) -> Self {
        NewAppointment {
            title: title.to_string(),
            description: None,
            start,
            end,
            category_id,
            subcategory_id: None,
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn subcategory(mut self, subcategory_id: Option<i64>) -> Self {
        self.subcategory_id = subcategory_id;
        self
    }

    /// Attaches the id assigned by the store.
    pub fn with_id(self, id: i64) -> Appointment {
        Appointment {
            id,
            title: self.title,
            description: self.description,
            start: self.start,
            end: self.end,
            category_id: self.category_id,
            subcategory_id: self.subcategory_id,
        }
    }
}

impl Appointment {
    /// `end - start`; negative when the interval is inverted.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Membership follows the start date only.
    pub fn is_on_date(&self, date: NaiveDate) -> bool {
        self.start.date() == date
    }

    /// Half-open intersection of `[start, end)` with this appointment's interval.
    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        start < self.end && end > self.start
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} ({} - {})", self.id, self.title, self.start.format("%d/%m/%Y %H:%M"), self.end.format("%H:%M"))
    }
}
