//! Status notifications: the transient, user-facing event feed.

use std::time::Duration;

/// How a notification should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Information,
    Warning,
    Error,
    Success,
}

/// One transient, human-readable status event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    /// How long the presenter should keep the message visible, if it
    /// cares; `None` means "use your default".
    pub duration: Option<Duration>,
}

impl Notification {
    #[must_use]
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            duration: None,
        }
    }

    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Information)
    }

    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Warning)
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }

    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    /// Attaches a display-duration hint.
    #[must_use]
    pub const fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
}

/// Result of one package's download attempt within a batch, fed to the
/// sink as it happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadOutcome {
    pub package: String,
    pub success: bool,
    /// Cleaned error text on failure; empty on success.
    pub message: String,
}

/// Where the orchestrators report status events.
///
/// Calls are fire-and-forget: implementations must not block the caller
/// and must swallow their own delivery failures.
pub trait StatusSink: Send + Sync {
    /// Presents a transient human-readable event.
    fn notify(&self, notification: Notification);

    /// Receives each per-package outcome during a batch run. The default
    /// does nothing; sinks that only present text can ignore these.
    fn outcome(&self, outcome: &DownloadOutcome) {
        let _ = outcome;
    }
}
