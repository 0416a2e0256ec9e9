use super::input;
use crate::{
    libs::{context::AppContext, messages::Message, view::View},
    msg_info, msg_warning,
};
use anyhow::Result;
use chrono::NaiveDateTime;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct ConflictsArgs {
    /// Date (DD/MM/YYYY, YYYY-MM-DD or 'today')
    #[arg(short, long, default_value = "today")]
    date: String,
    /// Start time (HH:MM)
    #[arg(short, long)]
    start: String,
    /// End time (HH:MM)
    #[arg(short, long)]
    end: String,
    /// Appointment ID to ignore, e.g. the one being rescheduled
    #[arg(short = 'x', long)]
    exclude: Option<i64>,
}

pub fn cmd(ctx: &AppContext, args: ConflictsArgs) -> Result<()> {
    let date = input::date(&args.date)?;
    let start = date.and_time(input::time(&args.start)?);
    let end = date.and_time(input::time(&args.end)?);

    let conflicts = ctx.appointments().conflicts(start, end, args.exclude)?;
    if conflicts.is_empty() {
        msg_info!(Message::NoConflicts);
        return Ok(());
    }

    msg_warning!(Message::ConflictsFound(conflicts.len()));
    View::appointments(&conflicts, &ctx.names()?)
}

/// Shows overlapping appointments and asks whether to go on. `true` when there is
/// nothing in the way or the user accepts.
pub(super) fn confirm_despite_conflicts(ctx: &AppContext, start: NaiveDateTime, end: NaiveDateTime, exclude_id: Option<i64>) -> Result<bool> {
    let conflicts = ctx.appointments().conflicts(start, end, exclude_id)?;
    if conflicts.is_empty() {
        return Ok(true);
    }

    msg_warning!(Message::ConflictsFound(conflicts.len()));
    View::appointments(&conflicts, &ctx.names()?)?;

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmSaveDespiteConflicts.to_string())
        .default(false)
        .interact()?;
    Ok(confirmed)
}
