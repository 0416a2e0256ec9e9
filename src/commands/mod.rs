pub mod add;
pub mod category;
pub mod conflicts;
pub mod day;
pub mod delete;
pub mod edit;
pub mod init;
pub mod input;
pub mod month;
pub mod range;
pub mod show;
pub mod upcoming;

use crate::libs::{config::Config, context::AppContext};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Write the configuration and prepare the database")]
    Init(init::InitArgs),
    #[command(about = "Manage categories and subcategories")]
    Category(category::CategoryArgs),
    #[command(about = "Create an appointment")]
    Add(add::AddArgs),
    #[command(about = "Change an existing appointment", arg_required_else_help = true)]
    Edit(edit::EditArgs),
    #[command(about = "Delete an appointment", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "Show one appointment", arg_required_else_help = true)]
    Show(show::ShowArgs),
    #[command(about = "Appointments of one day")]
    Day(day::DayArgs),
    #[command(about = "Appointments between two dates, inclusive")]
    Range(range::RangeArgs),
    #[command(about = "Appointments of the coming days")]
    Upcoming(upcoming::UpcomingArgs),
    #[command(about = "Month calendar with appointment counts")]
    Month(month::MonthArgs),
    #[command(about = "Find appointments overlapping a time slot")]
    Conflicts(conflicts::ConflictsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        let config = Config::read()?;
        cli.run(config)
    }

    /// Runs the parsed command. Every command except `init` works on a context that is
    /// opened here and closed afterwards, whether the command succeeded or not.
    pub fn run(self, config: Config) -> Result<()> {
        match self.command {
            Commands::Init(args) => init::cmd(config, args),
            Commands::Category(args) => with_context(config, |ctx| category::cmd(ctx, args)),
            Commands::Add(args) => with_context(config, |ctx| add::cmd(ctx, args)),
            Commands::Edit(args) => with_context(config, |ctx| edit::cmd(ctx, args)),
            Commands::Delete(args) => with_context(config, |ctx| delete::cmd(ctx, args)),
            Commands::Show(args) => with_context(config, |ctx| show::cmd(ctx, args)),
            Commands::Day(args) => with_context(config, |ctx| day::cmd(ctx, args)),
            Commands::Range(args) => with_context(config, |ctx| range::cmd(ctx, args)),
            Commands::Upcoming(args) => with_context(config, |ctx| upcoming::cmd(ctx, args)),
            Commands::Month(args) => with_context(config, |ctx| month::cmd(ctx, args)),
            Commands::Conflicts(args) => with_context(config, |ctx| conflicts::cmd(ctx, args)),
        }
    }
}

fn with_context<F>(config: Config, command: F) -> Result<()>
where
    F: FnOnce(&AppContext) -> Result<()>,
{
    let ctx = AppContext::open(config)?;
    let result = command(&ctx);
    let closed = ctx.close();
    result?;
    closed?;
    Ok(())
}
