//! Appointment table access.
//!
//! Start and end timestamps live in TEXT columns using the ISO-8601 layout from
//! [`crate::libs::timestamp`]. Day lookups are string-range comparisons on
//! `start_datetime`, valid because ISO-8601 text sorts chronologically.

use super::error::StoreResult;
use crate::libs::appointment::{Appointment, NewAppointment};
use crate::libs::timestamp::{day_bounds, format_timestamp, parse_timestamp};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};

pub(super) const SCHEMA_APPOINTMENTS: &str = "CREATE TABLE IF NOT EXISTS appointments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT,
    start_datetime TEXT NOT NULL,
    end_datetime TEXT NOT NULL,
    category_id INTEGER NOT NULL,
    subcategory_id INTEGER,
    FOREIGN KEY (category_id) REFERENCES categories (id),
    FOREIGN KEY (subcategory_id) REFERENCES subcategories (id)
)";
const INSERT_APPOINTMENT: &str = "INSERT INTO appointments
    (title, description, start_datetime, end_datetime, category_id, subcategory_id)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const UPDATE_APPOINTMENT: &str = "UPDATE appointments SET
    title = ?2, description = ?3, start_datetime = ?4, end_datetime = ?5,
    category_id = ?6, subcategory_id = ?7
    WHERE id = ?1";
const DELETE_APPOINTMENT: &str = "DELETE FROM appointments WHERE id = ?1";
const SELECT_APPOINTMENTS: &str =
    "SELECT id, title, description, start_datetime, end_datetime, category_id, subcategory_id FROM appointments";
const WHERE_ID: &str = "WHERE id = ?1";
const WHERE_START_WITHIN: &str = "WHERE start_datetime >= ?1 AND start_datetime <= ?2";
const WHERE_CATEGORY: &str = "WHERE category_id = ?1";
const WHERE_SUBCATEGORY: &str = "WHERE subcategory_id = ?1";
const ORDER_BY_START: &str = "ORDER BY start_datetime";

pub struct Appointments<'a> {
    conn: &'a Connection,
}

impl<'a> Appointments<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn insert(&self, appointment: &NewAppointment) -> StoreResult<i64> {
        self.conn.execute(
            INSERT_APPOINTMENT,
            params![
                appointment.title,
                appointment.description,
                format_timestamp(&appointment.start),
                format_timestamp(&appointment.end),
                appointment.category_id,
                appointment.subcategory_id,
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, title = %appointment.title, start = %appointment.start, "appointment inserted");
        Ok(id)
    }

    pub fn get_by_id(&self, id: i64) -> StoreResult<Option<Appointment>> {
        let appointment = self
            .conn
            .query_row(&format!("{} {}", SELECT_APPOINTMENTS, WHERE_ID), params![id], Self::from_row)
            .optional()?;
        Ok(appointment)
    }

    /// Appointments starting on `date`, earliest first.
    pub fn list_by_date(&self, date: NaiveDate) -> StoreResult<Vec<Appointment>> {
        let (from, to) = day_bounds(date);
        self.fetch(&format!("{} {} {}", SELECT_APPOINTMENTS, WHERE_START_WITHIN, ORDER_BY_START), params![from, to])
    }

    pub fn list_by_category(&self, category_id: i64) -> StoreResult<Vec<Appointment>> {
        self.fetch(&format!("{} {} {}", SELECT_APPOINTMENTS, WHERE_CATEGORY, ORDER_BY_START), params![category_id])
    }

    pub fn list_by_subcategory(&self, subcategory_id: i64) -> StoreResult<Vec<Appointment>> {
        self.fetch(&format!("{} {} {}", SELECT_APPOINTMENTS, WHERE_SUBCATEGORY, ORDER_BY_START), params![subcategory_id])
    }

    /// Replaces every mutable field of the row with `appointment.id`.
    /// Returns `false` when no such row exists.
    pub fn update(&self, appointment: &Appointment) -> StoreResult<bool> {
        let affected = self.conn.execute(
            UPDATE_APPOINTMENT,
            params![
                appointment.id,
                appointment.title,
                appointment.description,
                format_timestamp(&appointment.start),
                format_timestamp(&appointment.end),
                appointment.category_id,
                appointment.subcategory_id,
            ],
        )?;
        tracing::debug!(id = appointment.id, affected, "appointment update");
        Ok(affected > 0)
    }

    /// Returns `false` when no row had this id.
    pub fn delete(&self, id: i64) -> StoreResult<bool> {
        let affected = self.conn.execute(DELETE_APPOINTMENT, params![id])?;
        tracing::debug!(id, affected, "appointment delete");
        Ok(affected > 0)
    }

    fn fetch(&self, sql: &str, params: &[&dyn rusqlite::ToSql]) -> StoreResult<Vec<Appointment>> {
        let mut stmt = self.conn.prepare(sql)?;
        let appointment_iter = stmt.query_map(params, Self::from_row)?;

        let mut appointments = Vec::new();
        for appointment in appointment_iter {
            appointments.push(appointment?);
        }
        Ok(appointments)
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Appointment> {
        Ok(Appointment {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            start: timestamp_column(row, 3)?,
            end: timestamp_column(row, 4)?,
            category_id: row.get(5)?,
            subcategory_id: row.get(6)?,
        })
    }
}

fn timestamp_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<NaiveDateTime> {
    let text: String = row.get(idx)?;
    parse_timestamp(&text).map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
