//! aptsrc - interactive terminal front-end for fetching APT source packages.
//!
//! The library half holds the orchestration core: parsing `apt search`
//! output into candidates, tracking the user's selection, and driving a
//! strictly sequential `apt-get source --download-only` batch through a
//! pluggable process runner, with status feedback through a pluggable
//! notification sink. The TUI half (feature `tui`) renders that core with
//! ratatui.
//!
//! # Example
//!
//! ```no_run
//! use aptsrc::{AppConfig, Session, StatusSink, SystemRunner, run_batch, run_search};
//!
//! # async fn example(sink: &dyn StatusSink) -> aptsrc::Result<()> {
//! let config = AppConfig::default();
//! let mut session = Session::new();
//!
//! run_search(&mut session, &SystemRunner, sink, &config.tools, "zlib").await?;
//! for candidate in &session.candidates {
//!     session.selection.apply_toggle(&candidate.name, true);
//! }
//! let report = run_batch(&mut session, &SystemRunner, sink, &config.tools).await?;
//! println!("{} downloaded, {} failed", report.succeeded(), report.failed());
//! # Ok(())
//! # }
//! ```

#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod batch;
pub mod config;
pub mod error;
pub mod notify;
pub mod parse;
pub mod process;
pub mod search;
pub mod selection;
pub mod session;
pub mod text;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(test)]
mod testutil;

// Re-export the main types for convenience
pub use batch::{BatchReport, run_batch};
pub use config::{AppConfig, NotifyConfig, ToolsConfig};
pub use error::{Error, Result};
pub use notify::{DownloadOutcome, Notification, Severity, StatusSink};
pub use parse::{CandidateEntry, parse_search_output};
pub use process::{CommandOutput, CommandRunner, SystemRunner};
pub use search::{SearchOutcome, run_search};
pub use selection::SelectionSet;
pub use session::Session;
pub use text::strip_ansi;
