use agenda::commands::Cli;
use agenda::libs::messages::{macros::is_debug_mode, Message};
use agenda::msg_error;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let _ = dotenv::dotenv();

    if is_debug_mode() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("agenda=debug"));
        tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
    }

    match Cli::menu() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            msg_error!(Message::CommandFailed(format!("{:#}", e)));
            ExitCode::FAILURE
        }
    }
}
