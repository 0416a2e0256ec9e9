use super::input;
use crate::{
    libs::{context::AppContext, messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct UpcomingArgs {
    /// Number of days to look ahead; defaults to the configured value
    #[arg(short, long)]
    days: Option<u32>,
}

pub fn cmd(ctx: &AppContext, args: UpcomingArgs) -> Result<()> {
    let days = args.days.unwrap_or(ctx.config.upcoming_days);
    let appointments = ctx.appointments().upcoming(input::today(), days)?;

    if appointments.is_empty() {
        msg_info!(Message::NoUpcomingAppointments(days));
        return Ok(());
    }

    msg_print!(Message::UpcomingHeader(days), true);
    View::appointments(&appointments, &ctx.names()?)
}
