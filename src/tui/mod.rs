//! Terminal surface for the modal manager, built on ratatui
//!
//! The UI is drawn on stderr so a dialog's answer can be captured from
//! stdout by the calling shell.

mod app;
pub mod components;
mod events;
mod keys;
pub mod styles;
pub mod utils;

pub use app::{App, AppConfig};
pub use components::dialogs::LayerOptions;
pub use events::{Event, EventHandler};
pub use keys::KeyMap;
pub use styles::{Theme, ThemeName};

use crate::modal::Modal;
use anyhow::Result;
use crossterm::event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::future::Future;
use std::io;
use tracing::{debug, error};

pub type Backend = CrosstermBackend<io::Stderr>;
pub type Frame<'a> = ratatui::Frame<'a>;

/// Initialize the terminal for TUI mode
pub fn init_terminal(mouse: bool) -> Result<Terminal<Backend>> {
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen, EnableBracketedPaste)?;
    if mouse {
        execute!(stderr, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stderr);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode
pub fn restore_terminal(terminal: &mut Terminal<Backend>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// Best-effort restore used when no terminal handle is at hand
fn force_restore() {
    let _ = disable_raw_mode();
    let _ = execute!(
        io::stderr(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    );
}

/// Put the terminal back before a panic message is printed
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        force_restore();
        error!("Application panicked: {}", panic_info);
        previous(panic_info);
    }));
}

/// Run `flow` with a `Modal` handle whose dialogs are shown on the
/// terminal. Returns the flow's output once it completes.
pub async fn run<F, Fut, T>(theme: Theme, config: AppConfig, flow: F) -> Result<T>
where
    F: FnOnce(Modal) -> Fut,
    Fut: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let (modal, host) = Modal::new();
    let mut terminal = init_terminal(config.mouse_enabled)?;
    debug!("terminal initialized");

    let mut app = App::new(host, theme, config);
    let mut events = EventHandler::default();
    let caller = tokio::spawn(flow(modal));

    let result = app.run(&mut terminal, &mut events, caller).await;

    restore_terminal(&mut terminal)?;
    debug!("terminal restored");
    result
}
