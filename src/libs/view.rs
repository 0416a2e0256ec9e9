use super::appointment::Appointment;
use super::category::Category;
use super::formatter::{format_date, format_duration, DISPLAY_TIME_FORMAT};
use super::subcategory::Subcategory;
use anyhow::Result;
use chrono::{Datelike, NaiveDate, Timelike, Weekday};
use prettytable::{row, Cell, Row, Table};
use std::collections::HashMap;

/// Category and subcategory names by id, for rendering appointment rows.
#[derive(Debug, Default)]
pub struct TaxonomyNames {
    categories: HashMap<i64, String>,
    subcategories: HashMap<i64, String>,
}

impl TaxonomyNames {
    pub fn new(categories: &[Category], subcategories: &[Subcategory]) -> Self {
        TaxonomyNames {
            categories: categories.iter().map(|c| (c.id, c.name.clone())).collect(),
            subcategories: subcategories.iter().map(|s| (s.id, s.name.clone())).collect(),
        }
    }

    pub fn category(&self, id: i64) -> String {
        self.categories.get(&id).cloned().unwrap_or_else(|| format!("#{}", id))
    }

    pub fn subcategory(&self, id: Option<i64>) -> String {
        match id {
            Some(id) => self.subcategories.get(&id).cloned().unwrap_or_else(|| format!("#{}", id)),
            None => String::new(),
        }
    }
}

pub struct View {}

impl View {
    pub fn categories(categories: &[Category], subcategory_counts: &HashMap<i64, usize>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "COLOR", "SUBCATEGORIES"]);
        for category in categories {
            table.add_row(row![
                category.id,
                category.name,
                category.color,
                subcategory_counts.get(&category.id).copied().unwrap_or(0)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn subcategories(subcategories: &[Subcategory]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "COLOR"]);
        for subcategory in subcategories {
            table.add_row(row![subcategory.id, subcategory.name, subcategory.color]);
        }
        table.printstd();

        Ok(())
    }

    pub fn appointments(appointments: &[Appointment], names: &TaxonomyNames) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DATE", "START", "END", "DURATION", "TITLE", "CATEGORY", "SUBCATEGORY"]);
        for appointment in appointments {
            table.add_row(row![
                appointment.id,
                format_date(appointment.start.date()),
                appointment.start.format(DISPLAY_TIME_FORMAT),
                appointment.end.format(DISPLAY_TIME_FORMAT),
                format_duration(&appointment.duration()),
                appointment.title,
                names.category(appointment.category_id),
                names.subcategory(appointment.subcategory_id)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn appointment(appointment: &Appointment, names: &TaxonomyNames) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TITLE", appointment.title]);
        table.add_row(row!["DESCRIPTION", appointment.description.as_deref().unwrap_or("")]);
        table.add_row(row!["START", appointment.start.format("%d/%m/%Y %H:%M")]);
        table.add_row(row!["END", appointment.end.format("%d/%m/%Y %H:%M")]);
        table.add_row(row!["DURATION", format_duration(&appointment.duration())]);
        table.add_row(row!["CATEGORY", names.category(appointment.category_id)]);
        table.add_row(row!["SUBCATEGORY", names.subcategory(appointment.subcategory_id)]);
        table.printstd();

        Ok(())
    }

    /// Hourly slots from `from_hour` to 23, each listing the appointments starting in it.
    pub fn timeline(appointments: &[Appointment], from_hour: u32) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["HOUR", "APPOINTMENTS"]);
        for (hour, titles) in timeline_slots(appointments, from_hour) {
            table.add_row(row![format!("{:02}:00", hour), titles.join(", ")]);
        }
        table.printstd();

        Ok(())
    }

    /// Month grid, weeks starting on Monday; days with appointments show their count.
    pub fn month(first_day: NaiveDate, counts: &HashMap<NaiveDate, usize>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
        for week in month_grid(first_day) {
            let cells: Vec<String> = week
                .iter()
                .map(|day| match day {
                    Some(date) => match counts.get(date) {
                        Some(count) if *count > 0 => format!("{:>2} ({})", date.day(), count),
                        _ => format!("{:>2}", date.day()),
                    },
                    None => String::new(),
                })
                .collect();
            table.add_row(Row::new(cells.iter().map(|cell| Cell::new(cell)).collect()));
        }
        table.printstd();

        Ok(())
    }
}

/// `(hour, titles)` for each hour from `from_hour` to 23. Appointments starting before
/// `from_hour` are listed in the first slot.
pub fn timeline_slots(appointments: &[Appointment], from_hour: u32) -> Vec<(u32, Vec<String>)> {
    let from_hour = from_hour.min(23);
    let mut slots: Vec<(u32, Vec<String>)> = (from_hour..24).map(|hour| (hour, Vec::new())).collect();

    for appointment in appointments {
        let hour = appointment.start.hour().max(from_hour);
        let label = format!(
            "{} {}-{}",
            appointment.title,
            appointment.start.format(DISPLAY_TIME_FORMAT),
            appointment.end.format(DISPLAY_TIME_FORMAT)
        );
        slots[(hour - from_hour) as usize].1.push(label);
    }
    slots
}

/// Weeks of the month containing `first_day`, Monday first, padded with `None`.
pub fn month_grid(first_day: NaiveDate) -> Vec<[Option<NaiveDate>; 7]> {
    let first_day = first_day.with_day(1).unwrap_or(first_day);
    let mut weeks = Vec::new();
    let mut week = [None; 7];
    for date in first_day.iter_days().take_while(|date| date.month() == first_day.month()) {
        let column = date.weekday().num_days_from_monday() as usize;
        week[column] = Some(date);
        if date.weekday() == Weekday::Sun {
            weeks.push(week);
            week = [None; 7];
        }
    }
    if week.iter().any(Option::is_some) {
        weeks.push(week);
    }
    weeks
}
