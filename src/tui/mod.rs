//! Interactive TUI for searching packages and fetching their sources.

mod app;
mod draw;
mod event;
mod input;
mod worker;

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::Event;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;

use crate::config::AppConfig;

use self::app::App;
use self::draw::draw;
use self::event::UiEvent;
use self::input::{handle_input, handle_paste};
use self::worker::handle_event;

/// RAII guard that ensures terminal cleanup on drop.
/// Restores terminal to normal mode even if a panic occurs.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        crossterm::execute!(
            io::stdout(),
            EnterAlternateScreen,
            crossterm::event::EnableBracketedPaste
        )?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = crossterm::execute!(
            io::stdout(),
            crossterm::event::DisableBracketedPaste,
            LeaveAlternateScreen
        );
    }
}

/// Run the interactive TUI until the user quits.
///
/// # Errors
/// Returns an error if terminal setup fails or TUI operations encounter
/// I/O errors.
pub async fn run(config: AppConfig) -> io::Result<()> {
    // Initialize terminal with RAII guard for automatic cleanup
    let _terminal_guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<UiEvent>();
    let mut app = App::new(config, event_tx);

    loop {
        terminal.draw(|f| draw(f, &mut app))?;

        // Poll for input with 100ms timeout so worker events and toast
        // expiry stay responsive.
        if crossterm::event::poll(Duration::from_millis(100))? {
            match crossterm::event::read()? {
                Event::Key(key) => handle_input(&mut app, key),
                Event::Paste(text) => handle_paste(&mut app, &text),
                _ => {}
            }
        }

        // Drain worker events (non-blocking)
        while let Ok(event) = event_rx.try_recv() {
            handle_event(&mut app, event);
        }

        app.prune_toasts(Instant::now());

        if app.should_quit {
            break;
        }
    }

    // Show cursor before exit (terminal cleanup handled by RAII guard)
    terminal.show_cursor()?;

    Ok(())
}
