//! File-based tracing setup.
//!
//! The terminal belongs to the editor while it runs, so log lines go to a
//! file through a non-blocking writer.

use std::env;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;

/// Filter directives, e.g. `EWIG_LOG=debug`
pub const LOG_ENV: &str = "EWIG_LOG";
/// Log file path; defaults to `ewig.log` in the temp directory
pub const LOG_FILE_ENV: &str = "EWIG_LOG_FILE";

/// Install the subscriber when `EWIG_LOG` is set. The returned guard must
/// live until exit so buffered lines are flushed.
pub fn init() -> Option<WorkerGuard> {
    let filter = env::var(LOG_ENV).ok()?;
    let path = env::var_os(LOG_FILE_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| env::temp_dir().join("ewig.log"));
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file_name = path.file_name()?.to_os_string();

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
    match tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(nb_writer)
        .with_ansi(false)
        .try_init()
    {
        Ok(()) => {
            tracing::info!(path = %path.display(), "logging initialized");
            Some(guard)
        }
        Err(_) => None,
    }
}
