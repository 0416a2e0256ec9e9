use super::{conflicts::confirm_despite_conflicts, input};
use crate::{
    libs::{appointment::NewAppointment, context::AppContext, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Appointment title; prompted for when omitted
    #[arg(short, long)]
    title: Option<String>,
    /// Free-form description
    #[arg(long)]
    description: Option<String>,
    /// Date (DD/MM/YYYY, YYYY-MM-DD or 'today')
    #[arg(short, long, default_value = "today")]
    date: String,
    /// Start time (HH:MM)
    #[arg(short, long)]
    start: String,
    /// End time (HH:MM)
    #[arg(short, long)]
    end: String,
    /// Category name or ID
    #[arg(short, long)]
    category: String,
    /// Subcategory name or ID, within the category
    #[arg(long)]
    subcategory: Option<String>,
    /// Look for overlapping appointments and ask before saving
    #[arg(long)]
    check: bool,
}

pub fn cmd(ctx: &AppContext, args: AddArgs) -> Result<()> {
    let title = match args.title {
        Some(title) => input::title(&title)?,
        None => {
            let title: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTitle.to_string())
                .interact_text()?;
            input::title(&title)?
        }
    };

    let date = input::date(&args.date)?;
    let start = date.and_time(input::time(&args.start)?);
    let end = date.and_time(input::time(&args.end)?);
    let category = input::category(ctx, &args.category)?;
    let subcategory = match args.subcategory {
        Some(name) => Some(input::subcategory(ctx, &category, &name)?),
        None => None,
    };

    input::warn_if_inverted(start, end);
    if args.check && !confirm_despite_conflicts(ctx, start, end, None)? {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    let mut appointment = NewAppointment::new(&title, start, end, category.id).subcategory(subcategory.map(|s| s.id));
    appointment.description = input::description(args.description);

    let id = ctx.appointments().create(&appointment)?;
    msg_success!(Message::AppointmentCreated(id));
    Ok(())
}
