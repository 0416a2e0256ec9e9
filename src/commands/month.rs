use super::input;
use crate::{
    libs::{context::AppContext, messages::Message, view::View},
    msg_print,
};
use anyhow::Result;
use chrono::{Datelike, Months};
use clap::Args;
use std::collections::HashMap;

#[derive(Debug, Args)]
pub struct MonthArgs {
    /// Month (YYYY-MM), defaults to the current month
    month: Option<String>,
}

pub fn cmd(ctx: &AppContext, args: MonthArgs) -> Result<()> {
    let first_day = match args.month {
        Some(month) => input::month(&month)?,
        None => {
            let today = input::today();
            today.with_day(1).unwrap_or(today)
        }
    };
    let last_day = first_day
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(first_day);

    let mut counts = HashMap::new();
    for appointment in ctx.appointments().list_by_range(first_day, last_day)? {
        *counts.entry(appointment.start.date()).or_insert(0) += 1;
    }

    msg_print!(Message::MonthHeader(first_day.format("%m/%Y").to_string()), true);
    View::month(first_day, &counts)
}
