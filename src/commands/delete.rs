use crate::{
    libs::{context::AppContext, messages::Message},
    msg_bail_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Appointment ID
    id: i64,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(ctx: &AppContext, args: DeleteArgs) -> Result<()> {
    let appointments = ctx.appointments();

    let Some(appointment) = appointments.get(args.id)? else {
        msg_bail_anyhow!(Message::AppointmentNotFound(args.id));
    };

    let confirmed = args.yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteAppointment(appointment.title.clone()).to_string())
            .default(false)
            .interact()?;
    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    if !appointments.delete(appointment.id)? {
        msg_bail_anyhow!(Message::AppointmentNotFound(appointment.id));
    }
    msg_success!(Message::AppointmentDeleted(appointment.id));
    Ok(())
}
