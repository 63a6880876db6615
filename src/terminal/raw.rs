use std::io;
use std::panic::PanicHookInfo;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::EditorError;

type PanicHook = Box<dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static>;

static TERMINAL_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// RAII wrapper for raw mode and the alternate screen.
///
/// Creating it switches the terminal over; dropping it (or panicking while
/// it is alive) puts the terminal back.
pub struct RawMode {
    original_hook: Option<PanicHook>,
}

impl RawMode {
    /// Enter raw mode and the alternate screen
    pub fn new() -> Result<Self, EditorError> {
        crossterm::terminal::enable_raw_mode()?;

        let mut stdout = io::stdout();
        let entered = crossterm::execute!(
            stdout,
            crossterm::terminal::EnterAlternateScreen,
            crossterm::terminal::Clear(crossterm::terminal::ClearType::All)
        );
        TERMINAL_INITIALIZED.store(true, Ordering::SeqCst);
        if let Err(e) = entered {
            restore_terminal();
            return Err(e.into());
        }

        // Restore the terminal before the panic message is printed
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(|info| {
            restore_terminal();
            eprintln!("{}", info);
        }));

        tracing::debug!("terminal switched to raw mode");
        Ok(Self {
            original_hook: Some(original_hook),
        })
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        restore_terminal();

        if let Some(hook) = self.original_hook.take() {
            std::panic::set_hook(hook);
        }
        tracing::debug!("terminal restored");
    }
}

/// Leave the alternate screen and raw mode. Safe to call more than once.
fn restore_terminal() {
    if TERMINAL_INITIALIZED.swap(false, Ordering::SeqCst) {
        let mut stdout = io::stdout();
        let _ = crossterm::execute!(
            stdout,
            crossterm::cursor::Show,
            crossterm::terminal::LeaveAlternateScreen
        );
        let _ = crossterm::terminal::disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_without_init_is_noop() {
        // Never touches the terminal when raw mode was not entered
        restore_terminal();
        assert!(!TERMINAL_INITIALIZED.load(Ordering::SeqCst));
    }
}
