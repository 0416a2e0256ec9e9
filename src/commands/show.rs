use crate::{
    libs::{context::AppContext, messages::Message, view::View},
    msg_bail_anyhow, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Appointment ID
    id: i64,
}

pub fn cmd(ctx: &AppContext, args: ShowArgs) -> Result<()> {
    let Some(appointment) = ctx.appointments().get(args.id)? else {
        msg_bail_anyhow!(Message::AppointmentNotFound(args.id));
    };

    msg_print!(Message::AppointmentHeader(appointment.id), true);
    View::appointment(&appointment, &ctx.names()?)
}
