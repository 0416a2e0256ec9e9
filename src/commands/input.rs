//! Validation of command-line input.
//!
//! The services store whatever they are given; the checks the calendar form used to
//! perform (required title, date and time formats, known category) happen here.

use crate::{
    libs::{
        category::Category,
        context::AppContext,
        formatter::{parse_date, parse_month, parse_time},
        messages::Message,
        subcategory::Subcategory,
    },
    msg_bail_anyhow, msg_error_anyhow, msg_warning,
};
use anyhow::Result;
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn date(input: &str) -> Result<NaiveDate> {
    parse_date(input, today()).ok_or_else(|| msg_error_anyhow!(Message::InvalidDateFormat(input.to_string())))
}

pub fn time(input: &str) -> Result<NaiveTime> {
    parse_time(input).ok_or_else(|| msg_error_anyhow!(Message::InvalidTimeFormat(input.to_string())))
}

pub fn month(input: &str) -> Result<NaiveDate> {
    parse_month(input).ok_or_else(|| msg_error_anyhow!(Message::InvalidMonthFormat(input.to_string())))
}

pub fn title(input: &str) -> Result<String> {
    let title = input.trim();
    if title.is_empty() {
        msg_bail_anyhow!(Message::TitleRequired);
    }
    Ok(title.to_string())
}

/// Empty descriptions are stored as absent.
pub fn description(input: Option<String>) -> Option<String> {
    input.map(|d| d.trim().to_string()).filter(|d| !d.is_empty())
}

/// Category by name, or by id when the input is numeric.
pub fn category(ctx: &AppContext, input: &str) -> Result<Category> {
    let categories = ctx.categories();
    let found = match input.parse::<i64>() {
        Ok(id) => categories.get_category(id)?,
        Err(_) => categories.find_category(input)?,
    };
    found.ok_or_else(|| msg_error_anyhow!(Message::CategoryNotFound(input.to_string())))
}

/// Subcategory of `category` by name, or by id when the input is numeric.
pub fn subcategory(ctx: &AppContext, category: &Category, input: &str) -> Result<Subcategory> {
    let subcategories = ctx.categories().list_subcategories(category.id)?;
    let id = input.parse::<i64>().ok();
    subcategories
        .into_iter()
        .find(|s| Some(s.id) == id || s.name.eq_ignore_ascii_case(input))
        .ok_or_else(|| msg_error_anyhow!(Message::SubcategoryNotFound(input.to_string(), category.name.clone())))
}

/// Warns about inverted intervals; they are stored anyway.
pub fn warn_if_inverted(start: NaiveDateTime, end: NaiveDateTime) {
    if end < start {
        msg_warning!(Message::EndBeforeStart(start.format("%H:%M").to_string(), end.format("%H:%M").to_string()));
    }
}
