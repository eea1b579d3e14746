//! Owned per-run context for the orchestration core.

use crate::parse::CandidateEntry;
use crate::selection::SelectionSet;

/// Mutable state shared by the search and batch-download orchestrators.
///
/// Passed explicitly to each orchestrator call instead of living in a
/// global, so independent sessions (and tests) never interfere. Nothing
/// here survives the process; persistence across runs is out of scope.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Candidates from the most recent search; replaced wholesale.
    pub candidates: Vec<CandidateEntry>,
    /// Packages the user has marked for download.
    pub selection: SelectionSet,
}

impl Session {
    /// Creates an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops the previous results and the whole selection ahead of a new
    /// search; a new search invalidates all prior state.
    pub fn reset_for_search(&mut self) {
        self.candidates.clear();
        self.selection.clear();
    }
}
