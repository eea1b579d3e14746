//! Parser for the search command's line-oriented output.

use std::sync::LazyLock;

use regex::Regex;

/// One package name parsed out of search output.
///
/// Produced fresh on every search; the previous list is always discarded
/// wholesale, never merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateEntry {
    /// Package name as printed by the tool.
    pub name: String,
}

// `apt search` prints one `name/suite version arch` line per package,
// followed by indented description lines.
static PACKAGE_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^/]+)/").expect("valid regex"));

/// Extracts package names from raw search output.
///
/// A line names a package iff it starts with non-slash characters followed
/// by a slash; the captured prefix, trimmed, is the name. Description and
/// continuation lines never match and are skipped silently. Order is
/// preserved. Malformed input yields an empty list, not an error.
#[must_use]
pub fn parse_search_output(raw: &str) -> Vec<CandidateEntry> {
    raw.lines()
        .filter_map(|line| {
            let captures = PACKAGE_LINE_RE.captures(line)?;
            let name = captures.get(1)?.as_str().trim();
            if name.is_empty() {
                None
            } else {
                Some(CandidateEntry {
                    name: name.to_string(),
                })
            }
        })
        .collect()
}
