//! Sequential batch download of the selected packages' sources.

use std::time::Duration;

use crate::config::ToolsConfig;
use crate::error::{Error, Result};
use crate::notify::{DownloadOutcome, Notification, StatusSink};
use crate::process::CommandRunner;
use crate::session::Session;
use crate::text;

/// Aggregate record of one batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Per-package outcomes, in attempt order.
    pub outcomes: Vec<DownloadOutcome>,
    /// True when the batch stopped early because the tool went missing.
    pub aborted: bool,
}

impl BatchReport {
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.success).count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.success).count()
    }
}

/// Attempts a source download for every selected package, one at a time.
///
/// The selection is snapshotted up front, so the live set can shrink as
/// items succeed without perturbing the iteration. Successful packages
/// are removed from the live selection; failed ones stay in it and can be
/// retried by a later batch. A missing download executable aborts the
/// remaining batch; any other per-item failure moves on to the next item.
/// No two downloads ever overlap.
///
/// # Errors
///
/// [`Error::NothingSelected`] when the selection is empty (no process is
/// spawned). All other failures are per-item: reported through `sink`,
/// recorded in the report, and never fatal to the batch call itself.
pub async fn run_batch(
    session: &mut Session,
    runner: &dyn CommandRunner,
    sink: &dyn StatusSink,
    tools: &ToolsConfig,
) -> Result<BatchReport> {
    if session.selection.is_empty() {
        sink.notify(Notification::warning(
            "No packages selected for source code download.",
        ));
        return Err(Error::NothingSelected);
    }

    let queued = session.selection.snapshot();
    sink.notify(
        Notification::info(format!(
            "Starting source code download for {} packages...",
            queued.len()
        ))
        .with_duration(Duration::from_secs(5)),
    );

    let mut report = BatchReport::default();

    for package in &queued {
        sink.notify(
            Notification::info(format!("Downloading source code for '{package}'..."))
                .with_duration(Duration::from_secs(2)),
        );

        let args = vec![
            "source".to_string(),
            "--download-only".to_string(),
            package.clone(),
        ];

        let outcome = match runner.run(&tools.source_program, &args).await {
            Ok(output) if output.success => {
                sink.notify(Notification::success(format!(
                    "Successfully downloaded source for '{package}'."
                )));
                session.selection.remove(package);
                DownloadOutcome {
                    package: package.clone(),
                    success: true,
                    message: String::new(),
                }
            }
            Ok(output) => {
                let message = text::clean_stderr(&output.stderr);
                sink.notify(Notification::error(format!(
                    "Failed to download source for '{package}': {message}"
                )));
                DownloadOutcome {
                    package: package.clone(),
                    success: false,
                    message,
                }
            }
            Err(Error::ToolNotFound { program }) => {
                sink.notify(Notification::error(format!(
                    "Error: '{program}' command not found. Cannot perform source download."
                )));
                let outcome = DownloadOutcome {
                    package: package.clone(),
                    success: false,
                    message: format!("'{program}' command not found"),
                };
                sink.outcome(&outcome);
                report.outcomes.push(outcome);
                report.aborted = true;
                break;
            }
            Err(e) => {
                log::warn!("download of '{package}' failed unexpectedly: {e}");
                sink.notify(Notification::error(format!(
                    "An unexpected error occurred during source download of '{package}': {e}"
                )));
                DownloadOutcome {
                    package: package.clone(),
                    success: false,
                    message: e.to_string(),
                }
            }
        };

        sink.outcome(&outcome);
        report.outcomes.push(outcome);
    }

    log::info!(
        "batch finished: {} succeeded, {} failed, {} still selected",
        report.succeeded(),
        report.failed(),
        session.selection.len()
    );
    if session.selection.is_empty() {
        sink.notify(Notification::info(
            "All selected packages attempted source download.",
        ));
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Severity;
    use crate::testutil::{CaptureSink, FakeRunner};

    fn session_with(names: &[&str]) -> Session {
        let mut session = Session::new();
        for name in names {
            session.selection.apply_toggle(name, true);
        }
        session
    }

    // --- preconditions ---

    #[tokio::test]
    async fn empty_selection_never_spawns() {
        let runner = FakeRunner::new();
        let sink = CaptureSink::new();
        let mut session = Session::new();

        let result = run_batch(&mut session, &runner, &sink, &ToolsConfig::default()).await;

        assert!(matches!(result, Err(Error::NothingSelected)));
        assert_eq!(runner.call_count(), 0);
        let notices = sink.notices.lock().unwrap();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].severity, Severity::Warning);
    }

    // --- invocation shape ---

    #[tokio::test]
    async fn invokes_source_download_per_package() {
        let runner = FakeRunner::new();
        runner.push_ok("");
        runner.push_ok("");
        let sink = CaptureSink::new();
        let mut session = session_with(&["bar", "foo"]);

        run_batch(&mut session, &runner, &sink, &ToolsConfig::default())
            .await
            .unwrap();

        let calls = runner.calls.lock().unwrap();
        // Snapshot order is sorted, one sequential invocation per package.
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, "apt-get");
        assert_eq!(calls[0].1, vec!["source", "--download-only", "bar"]);
        assert_eq!(calls[1].1, vec!["source", "--download-only", "foo"]);
    }

    // --- selection reconciliation ---

    #[tokio::test]
    async fn success_removes_failure_retains() {
        let runner = FakeRunner::new();
        runner.push_ok(""); // alpha
        runner.push_failure("E: Unable to find a source package for beta\n"); // beta
        let sink = CaptureSink::new();
        let mut session = session_with(&["alpha", "beta"]);

        let report = run_batch(&mut session, &runner, &sink, &ToolsConfig::default())
            .await
            .unwrap();

        assert!(!session.selection.contains("alpha"));
        assert!(session.selection.contains("beta"));
        assert_eq!(report.succeeded(), 1);
        assert_eq!(report.failed(), 1);
        assert!(!report.aborted);
        assert_eq!(
            report.outcomes[1].message,
            "E: Unable to find a source package for beta"
        );
    }

    #[tokio::test]
    async fn batch_completion_notice_only_when_selection_drains() {
        let runner = FakeRunner::new();
        runner.push_ok("");
        let sink = CaptureSink::new();
        let mut session = session_with(&["only"]);

        run_batch(&mut session, &runner, &sink, &ToolsConfig::default())
            .await
            .unwrap();

        assert!(session.selection.is_empty());
        assert_eq!(
            sink.messages().last().unwrap(),
            "All selected packages attempted source download."
        );
    }

    #[tokio::test]
    async fn no_completion_notice_when_items_remain() {
        let runner = FakeRunner::new();
        runner.push_failure("nope");
        let sink = CaptureSink::new();
        let mut session = session_with(&["stuck"]);

        run_batch(&mut session, &runner, &sink, &ToolsConfig::default())
            .await
            .unwrap();

        assert_eq!(session.selection.len(), 1);
        assert!(
            !sink
                .messages()
                .contains(&"All selected packages attempted source download.".to_string())
        );
    }

    // --- abort semantics ---

    #[tokio::test]
    async fn missing_tool_aborts_remaining_batch() {
        let runner = FakeRunner::new();
        runner.push_ok(""); // item 1 succeeds
        runner.push_err(Error::ToolNotFound {
            program: "apt-get".to_string(),
        }); // item 2 hits the missing tool
        let sink = CaptureSink::new();
        let mut session = session_with(&["aa", "bb", "cc"]);

        let report = run_batch(&mut session, &runner, &sink, &ToolsConfig::default())
            .await
            .unwrap();

        // Item 3 was never attempted.
        assert_eq!(runner.call_count(), 2);
        assert!(report.aborted);
        // Outcomes processed before the abort are retained.
        assert_eq!(report.outcomes.len(), 2);
        assert!(report.outcomes[0].success);
        assert!(!report.outcomes[1].success);
        // The succeeded item left the selection; the rest stayed.
        assert!(!session.selection.contains("aa"));
        assert!(session.selection.contains("bb"));
        assert!(session.selection.contains("cc"));
    }

    #[tokio::test]
    async fn unexpected_failure_continues_with_next_item() {
        let runner = FakeRunner::new();
        runner.push_err(Error::Io(std::io::Error::other("spawn failed")));
        runner.push_ok("");
        let sink = CaptureSink::new();
        let mut session = session_with(&["aa", "bb"]);

        let report = run_batch(&mut session, &runner, &sink, &ToolsConfig::default())
            .await
            .unwrap();

        assert_eq!(runner.call_count(), 2);
        assert!(!report.aborted);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.succeeded(), 1);
        assert!(session.selection.contains("aa"));
        assert!(!session.selection.contains("bb"));
    }

    // --- outcome feed ---

    #[tokio::test]
    async fn outcomes_are_fed_to_the_sink_as_they_happen() {
        let runner = FakeRunner::new();
        runner.push_ok("");
        runner.push_failure("boom");
        let sink = CaptureSink::new();
        let mut session = session_with(&["aa", "bb"]);

        run_batch(&mut session, &runner, &sink, &ToolsConfig::default())
            .await
            .unwrap();

        let outcomes = sink.outcomes.lock().unwrap();
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].package, "aa");
        assert!(outcomes[0].success);
        assert_eq!(outcomes[1].package, "bb");
        assert!(!outcomes[1].success);
        assert_eq!(outcomes[1].message, "boom");
    }
}
