//! In-place appointment update.
//!
//! Only the fields given on the command line change. A new date moves both ends of the
//! interval to that day while keeping their times; a new category drops a subcategory
//! that does not belong to it.

use super::{conflicts::confirm_despite_conflicts, input};
use crate::{
    libs::{appointment::Appointment, context::AppContext, messages::Message},
    msg_bail_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Appointment ID
    id: i64,
    #[arg(short, long)]
    title: Option<String>,
    #[arg(long)]
    description: Option<String>,
    /// New date (DD/MM/YYYY, YYYY-MM-DD or 'today')
    #[arg(short, long)]
    date: Option<String>,
    /// New start time (HH:MM)
    #[arg(short, long)]
    start: Option<String>,
    /// New end time (HH:MM)
    #[arg(short, long)]
    end: Option<String>,
    /// Category name or ID
    #[arg(short, long)]
    category: Option<String>,
    /// Subcategory name or ID, within the (new) category
    #[arg(long, conflicts_with = "no_subcategory")]
    subcategory: Option<String>,
    /// Remove the subcategory
    #[arg(long)]
    no_subcategory: bool,
    /// Look for overlapping appointments and ask before saving
    #[arg(long)]
    check: bool,
}

impl EditArgs {
    fn has_changes(&self) -> bool {
        self.title.is_some()
            || self.description.is_some()
            || self.date.is_some()
            || self.start.is_some()
            || self.end.is_some()
            || self.category.is_some()
            || self.subcategory.is_some()
            || self.no_subcategory
    }
}

pub fn cmd(ctx: &AppContext, args: EditArgs) -> Result<()> {
    if !args.has_changes() {
        msg_bail_anyhow!(Message::NoChangesProvided);
    }

    let Some(current) = ctx.appointments().get(args.id)? else {
        msg_bail_anyhow!(Message::AppointmentNotFound(args.id));
    };

    let updated = apply(ctx, current, &args)?;
    input::warn_if_inverted(updated.start, updated.end);
    if args.check && !confirm_despite_conflicts(ctx, updated.start, updated.end, Some(updated.id))? {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    if !ctx.appointments().update(&updated)? {
        msg_bail_anyhow!(Message::AppointmentNotFound(updated.id));
    }
    msg_success!(Message::AppointmentUpdated(updated.id));
    Ok(())
}

fn apply(ctx: &AppContext, mut appointment: Appointment, args: &EditArgs) -> Result<Appointment> {
    if let Some(title) = &args.title {
        appointment.title = input::title(title)?;
    }
    if let Some(description) = &args.description {
        appointment.description = input::description(Some(description.clone()));
    }

    let (start_date, end_date) = match &args.date {
        Some(date) => {
            let date = input::date(date)?;
            (date, date)
        }
        None => (appointment.start.date(), appointment.end.date()),
    };
    let start_time = match &args.start {
        Some(time) => input::time(time)?,
        None => appointment.start.time(),
    };
    let end_time = match &args.end {
        Some(time) => input::time(time)?,
        None => appointment.end.time(),
    };
    appointment.start = start_date.and_time(start_time);
    appointment.end = end_date.and_time(end_time);

    if let Some(category) = &args.category {
        let category = input::category(ctx, category)?;
        if category.id != appointment.category_id {
            let kept = match appointment.subcategory_id {
                Some(id) => ctx.categories().get_subcategory(id)?.filter(|s| s.category_id == category.id),
                None => None,
            };
            appointment.category_id = category.id;
            appointment.subcategory_id = kept.map(|s| s.id);
        }
    }

    if args.no_subcategory {
        appointment.subcategory_id = None;
    } else if let Some(subcategory) = &args.subcategory {
        let category = input::category(ctx, &appointment.category_id.to_string())?;
        appointment.subcategory_id = Some(input::subcategory(ctx, &category, subcategory)?.id);
    }

    Ok(appointment)
}
