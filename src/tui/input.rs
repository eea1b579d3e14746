//! Keyboard and paste input handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::notify::Notification;

use super::app::{App, PendingAction, Tab};
use super::worker;

pub fn handle_input(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => app.should_quit = true,
            KeyCode::Char('t') => app.dark = !app.dark,
            KeyCode::Char('d') if app.active_tab == Tab::Download => submit_batch(app),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Tab => app.next_tab(),
        KeyCode::BackTab => app.prev_tab(),
        _ => match app.active_tab {
            Tab::Download => handle_download_tab(app, key),
            Tab::Compile | Tab::Export => handle_placeholder_tab(app, key),
        },
    }
}

fn handle_download_tab(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => submit_search(app),
        KeyCode::Up => app.move_cursor_up(),
        KeyCode::Down => app.move_cursor_down(),
        // Space toggles the highlighted row once the search bar is empty;
        // with text present it types into the query instead.
        KeyCode::Char(' ') if app.search_input.is_empty() => toggle_highlighted(app),
        KeyCode::Esc => {
            if app.search_input.is_empty() {
                app.should_quit = true;
            } else {
                app.search_input.clear();
            }
        }
        KeyCode::Char(c) => app.search_input.push(c),
        KeyCode::Backspace => {
            app.search_input.pop();
        }
        _ => {}
    }
}

fn handle_placeholder_tab(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
        app.should_quit = true;
    }
}

pub fn handle_paste(app: &mut App, text: &str) {
    if app.active_tab == Tab::Download {
        app.search_input
            .push_str(&text.replace(['\n', '\r'], " "));
    }
}

/// Dispatches a search for the current query. Validation (including the
/// empty-query case) lives in the orchestrator; the UI only pre-clears
/// its display when a search will actually start.
fn submit_search(app: &mut App) {
    if app.busy() {
        app.push_toast(Notification::warning("Another action is still running."));
        return;
    }

    let keywords = app.search_input.trim().to_string();
    if !keywords.is_empty() {
        // Mirrors the orchestrator: a new search invalidates everything.
        app.session.reset_for_search();
        app.results_state.select(None);
        app.placeholder = None;
        app.search_input.clear();
    }

    app.pending = Some(PendingAction::Search);
    worker::start_search(
        &app.event_tx,
        app.session.clone(),
        app.runner.clone(),
        app.config.tools.clone(),
        keywords,
    );
}

/// Dispatches a batch download of the current selection. The empty-
/// selection warning comes from the orchestrator.
fn submit_batch(app: &mut App) {
    if app.busy() {
        app.push_toast(Notification::warning("Another action is still running."));
        return;
    }

    app.pending = Some(PendingAction::Download);
    worker::start_batch(
        &app.event_tx,
        app.session.clone(),
        app.runner.clone(),
        app.config.tools.clone(),
    );
}

/// Flips the highlighted candidate in or out of the selection and
/// acknowledges it with a short toast.
fn toggle_highlighted(app: &mut App) {
    if app.busy() {
        app.push_toast(Notification::warning("Another action is still running."));
        return;
    }

    if let Some(i) = app.results_state.selected()
        && let Some(entry) = app.session.candidates.get(i)
    {
        let name = entry.name.clone();
        let selected = !app.session.selection.contains(&name);
        app.session.selection.apply_toggle(&name, selected);
        let verb = if selected { "selected" } else { "deselected" };
        app.push_toast(
            Notification::info(format!("'{name}' {verb}."))
                .with_duration(std::time::Duration::from_secs(1)),
        );
    }
}
