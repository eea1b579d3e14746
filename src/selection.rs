//! The user's in-progress choice of packages to download.

use std::collections::HashSet;

/// Set of package names currently marked for download.
///
/// Names are unique and unordered. Toggle events carry the intended new
/// state explicitly rather than flipping, so redelivering the same event
/// is idempotent.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    names: HashSet<String>,
}

impl SelectionSet {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a toggle event; `selected` is the intended new state.
    pub fn apply_toggle(&mut self, name: &str, selected: bool) {
        if selected {
            self.names.insert(name.to_string());
        } else {
            self.names.remove(name);
        }
    }

    /// Removes a name; no-op if absent.
    pub fn remove(&mut self, name: &str) {
        self.names.remove(name);
    }

    /// Drops every selected name.
    pub fn clear(&mut self) {
        self.names.clear();
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Copies out the current members, sorted so batch runs and logs are
    /// deterministic. Mutating the live set afterwards does not affect
    /// the snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Vec<String> {
        let mut names: Vec<String> = self.names.iter().cloned().collect();
        names.sort();
        names
    }
}
