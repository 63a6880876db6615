//! Command-line argument parsing

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;

#[derive(Parser, Debug)]
#[command(name = "ewig", version, about = "A small emacs-like editor", long_about = None)]
pub struct Cli {
    /// File to edit
    pub file: PathBuf,
}

impl Cli {
    /// Parse the process arguments. On failure the message has already been
    /// printed and the exit code is returned instead.
    pub fn from_env() -> Result<Self, ExitCode> {
        Self::try_parse().map_err(report)
    }
}

/// Print a clap error and choose the exit status. Help and version output
/// are successful exits; every usage error exits with 1.
fn report(err: clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("Give me a file name.");
            let _ = err.print();
            ExitCode::FAILURE
        }
    }
}
