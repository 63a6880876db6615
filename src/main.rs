//! ewig - an emacs-flavoured editor over an immutable document
//!
//! This is the main entry point. It parses CLI arguments, sets up logging
//! and configuration, and hands the file to the terminal runner.

mod cli;
mod logging;

use std::process::ExitCode;

use ewig::config::Config;
use ewig::{run, user_config};

fn main() -> ExitCode {
    let cli = match cli::Cli::from_env() {
        Ok(cli) => cli,
        Err(code) => return code,
    };

    // Held until exit so buffered log lines reach the file
    let _log_guard = logging::init();

    let mut config = Config::default();
    user_config::configure(&mut config);
    config.apply_env();

    tracing::info!(file = %cli.file.display(), "starting");
    match run::run_terminal_mode(&cli.file, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "exiting");
            eprintln!("ewig: {}", err);
            ExitCode::FAILURE
        }
    }
}
