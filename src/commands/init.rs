//! First-run setup.
//!
//! Writes the configuration file, creates the database schema and seeds the default
//! taxonomy. Running it again is harmless: existing settings are kept and categories
//! that already exist are not recreated.

use crate::{
    libs::{config::Config, context::AppContext, messages::Message},
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Print the effective configuration instead of writing it
    #[arg(short, long)]
    show: bool,
}

pub fn cmd(config: Config, args: InitArgs) -> Result<()> {
    if args.show {
        msg_print!(Message::ConfigCurrent(config.db_path()?.display().to_string()));
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let config_path = config.save()?;
    msg_success!(Message::ConfigSaved(config_path.display().to_string()));

    let db_path = config.db_path()?;
    let ctx = AppContext::open(config)?;
    let seeded = ctx.seeded();
    if !seeded.is_empty() {
        msg_info!(Message::TaxonomySeeded(seeded.categories, seeded.subcategories));
    }
    ctx.close()?;

    msg_success!(Message::DatabaseReady(db_path.display().to_string()));
    Ok(())
}
