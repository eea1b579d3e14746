//! Background action tasks and their event handling.
//!
//! One search or batch download runs at a time. The dispatching code
//! clones the session into the task; the terminal event carries the
//! mutated session back and replaces the UI's copy. Input handling
//! rejects new actions while one is pending, so the two copies cannot
//! diverge.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::batch;
use crate::config::ToolsConfig;
use crate::notify::{DownloadOutcome, Notification, StatusSink};
use crate::process::CommandRunner;
use crate::search::{self, SearchOutcome};
use crate::session::Session;

use super::app::{App, NO_MATCHES, NO_PACKAGES};
use super::event::UiEvent;

/// Sink forwarding orchestrator notifications into the UI event loop.
pub struct EventSink {
    tx: mpsc::UnboundedSender<UiEvent>,
}

impl EventSink {
    #[must_use]
    pub const fn new(tx: mpsc::UnboundedSender<UiEvent>) -> Self {
        Self { tx }
    }
}

impl StatusSink for EventSink {
    fn notify(&self, notification: Notification) {
        let _ = self.tx.send(UiEvent::Notice(notification));
    }

    fn outcome(&self, outcome: &DownloadOutcome) {
        let _ = self.tx.send(UiEvent::Outcome(outcome.clone()));
    }
}

/// Spawns the search task; finishes with a `SearchDone` event.
pub fn start_search(
    tx: &mpsc::UnboundedSender<UiEvent>,
    mut session: Session,
    runner: Arc<dyn CommandRunner>,
    tools: ToolsConfig,
    keywords: String,
) {
    let tx = tx.clone();
    tokio::spawn(async move {
        let sink = EventSink::new(tx.clone());
        let outcome =
            search::run_search(&mut session, &*runner, &sink, &tools, &keywords).await;
        let _ = tx.send(UiEvent::SearchDone { session, outcome });
    });
}

/// Spawns the batch download task; finishes with a `BatchDone` event.
pub fn start_batch(
    tx: &mpsc::UnboundedSender<UiEvent>,
    mut session: Session,
    runner: Arc<dyn CommandRunner>,
    tools: ToolsConfig,
) {
    let tx = tx.clone();
    tokio::spawn(async move {
        let sink = EventSink::new(tx.clone());
        let report = batch::run_batch(&mut session, &*runner, &sink, &tools).await;
        let _ = tx.send(UiEvent::BatchDone { session, report });
    });
}

/// Applies one worker event to the UI state.
pub fn handle_event(app: &mut App, event: UiEvent) {
    match event {
        UiEvent::Notice(notification) => app.push_toast(notification),
        UiEvent::Outcome(outcome) => {
            // Mirror the worker's live-selection bookkeeping so the
            // displayed count tracks the batch as it runs.
            if outcome.success {
                app.session.selection.remove(&outcome.package);
            }
        }
        UiEvent::SearchDone { session, outcome } => {
            app.session = session;
            app.pending = None;
            app.placeholder = match outcome {
                Ok(SearchOutcome::Found(_)) => None,
                Ok(SearchOutcome::NoOutput) => Some(NO_PACKAGES),
                Ok(SearchOutcome::NoMatches) => Some(NO_MATCHES),
                Err(e) => {
                    log::debug!("search failed: {e}");
                    None
                }
            };
            app.results_state.select(if app.session.candidates.is_empty() {
                None
            } else {
                Some(0)
            });
        }
        UiEvent::BatchDone { session, report } => {
            app.session = session;
            app.pending = None;
            if let Err(e) = report {
                log::debug!("batch not run: {e}");
            }
        }
    }
}
