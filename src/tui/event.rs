//! Events sent from worker tasks to the UI loop.

use crate::batch::BatchReport;
use crate::error::Error;
use crate::notify::{DownloadOutcome, Notification};
use crate::search::SearchOutcome;
use crate::session::Session;

/// Messages the background action tasks send back to the event loop.
///
/// Exactly one action runs at a time; its terminal event carries the
/// session back so the UI state catches up with what the orchestrator
/// did to it.
#[derive(Debug)]
pub enum UiEvent {
    /// A status notification to surface as a toast.
    Notice(Notification),
    /// One package finished during a batch run.
    Outcome(DownloadOutcome),
    /// The search action finished.
    SearchDone {
        session: Session,
        outcome: Result<SearchOutcome, Error>,
    },
    /// The batch download action finished.
    BatchDone {
        session: Session,
        report: Result<BatchReport, Error>,
    },
}
