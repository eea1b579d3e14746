//! Search orchestration: keyword validation, process invocation, parsing.

use std::time::Duration;

use crate::config::ToolsConfig;
use crate::error::{Error, Result};
use crate::notify::{Notification, StatusSink};
use crate::parse;
use crate::process::CommandRunner;
use crate::session::Session;
use crate::text;

/// Terminal state of a search call that did not fail.
///
/// The two empty cases carry different user-facing messages and must stay
/// distinguishable: "the tool printed nothing" is not the same situation
/// as "the tool printed output we could not use".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Candidates were published into the session.
    Found(usize),
    /// The tool exited cleanly with no output at all.
    NoOutput,
    /// Output was present but no line matched the package pattern.
    NoMatches,
}

/// Runs one search action against the external tool and publishes the
/// parsed candidates into `session.candidates`.
///
/// On any validly-started search the prior candidates and the whole
/// selection are discarded before the process runs; a new search
/// invalidates previous state regardless of how it ends. Every exit path
/// reports itself through `sink` before returning.
///
/// # Errors
///
/// [`Error::EmptyQuery`] and [`Error::Query`] for keyword validation
/// failures (no process is spawned), [`Error::ToolNotFound`] when the
/// search executable is missing, [`Error::Process`] when it exits
/// non-zero, and [`Error::Io`] for unexpected spawn failures.
pub async fn run_search(
    session: &mut Session,
    runner: &dyn CommandRunner,
    sink: &dyn StatusSink,
    tools: &ToolsConfig,
    keywords: &str,
) -> Result<SearchOutcome> {
    let keywords = keywords.trim();
    if keywords.is_empty() {
        sink.notify(Notification::warning("Please enter search keywords."));
        return Err(Error::EmptyQuery);
    }

    let args = match search_args(keywords) {
        Ok(args) => args,
        Err(e) => {
            sink.notify(Notification::warning(e.to_string()));
            return Err(e);
        }
    };

    sink.notify(
        Notification::info(format!("Searching for '{keywords}'..."))
            .with_duration(Duration::from_secs(3)),
    );
    session.reset_for_search();

    let output = match runner.run(&tools.search_program, &args).await {
        Ok(output) => output,
        Err(e) => {
            let message = match &e {
                Error::ToolNotFound { program } => format!(
                    "Error: '{program}' command not found. Is it installed and in your PATH?"
                ),
                other => format!("An unexpected error occurred: {other}"),
            };
            sink.notify(Notification::error(message));
            return Err(e);
        }
    };

    if !output.success {
        let message = text::clean_stderr(&output.stderr);
        log::warn!("search exited non-zero: {message}");
        sink.notify(Notification::error(format!(
            "Error during search: {message}"
        )));
        return Err(Error::Process(message));
    }

    let stdout = output.stdout.trim();
    if stdout.is_empty() {
        sink.notify(Notification::info("No packages found."));
        return Ok(SearchOutcome::NoOutput);
    }

    let candidates = parse::parse_search_output(stdout);
    if candidates.is_empty() {
        sink.notify(Notification::info(
            "No relevant packages found after parsing the output.",
        ));
        return Ok(SearchOutcome::NoMatches);
    }

    let count = candidates.len();
    session.candidates = candidates;
    sink.notify(Notification::success(format!(
        "Search complete. Found {count} packages."
    )));
    Ok(SearchOutcome::Found(count))
}

/// Builds the search argument vector: `search` plus the keyword string
/// split by shell-lexical rules. The keywords are never handed to an
/// actual shell.
fn search_args(keywords: &str) -> Result<Vec<String>> {
    let mut args = vec!["search".to_string()];
    let tokens = shell_words::split(keywords).map_err(|e| Error::Query(e.to_string()))?;
    args.extend(tokens);
    Ok(args)
}
