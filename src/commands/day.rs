use super::input;
use crate::{
    libs::{context::AppContext, formatter::format_date, messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DayArgs {
    /// Date (DD/MM/YYYY, YYYY-MM-DD or 'today')
    #[arg(default_value = "today")]
    date: String,
    /// Also show the hourly timeline
    #[arg(short, long)]
    timeline: bool,
}

pub fn cmd(ctx: &AppContext, args: DayArgs) -> Result<()> {
    let date = input::date(&args.date)?;
    let appointments = ctx.appointments().list_by_date(date)?;

    if appointments.is_empty() && !args.timeline {
        msg_info!(Message::NoAppointmentsForDate(format_date(date)));
        return Ok(());
    }

    if !appointments.is_empty() {
        msg_print!(Message::AppointmentsForDate(format_date(date)), true);
        View::appointments(&appointments, &ctx.names()?)?;
    }

    if args.timeline {
        msg_print!(Message::TimelineHeader(format_date(date)), true);
        View::timeline(&appointments, ctx.config.day_start_hour)?;
    }
    Ok(())
}
