use super::input;
use crate::{
    libs::{context::AppContext, formatter::format_date, messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct RangeArgs {
    /// First day, inclusive
    from: String,
    /// Last day, inclusive
    to: String,
}

pub fn cmd(ctx: &AppContext, args: RangeArgs) -> Result<()> {
    let from = input::date(&args.from)?;
    let to = input::date(&args.to)?;
    let appointments = ctx.appointments().list_by_range(from, to)?;

    if appointments.is_empty() {
        msg_info!(Message::NoAppointmentsInRange(format_date(from), format_date(to)));
        return Ok(());
    }

    msg_print!(Message::AppointmentsForRange(format_date(from), format_date(to)), true);
    View::appointments(&appointments, &ctx.names()?)
}
