//! Shared fakes for orchestrator tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::Result;
use crate::notify::{DownloadOutcome, Notification, StatusSink};
use crate::process::{CommandOutput, CommandRunner};

/// Runner that replays a scripted sequence of results and records every
/// invocation.
#[derive(Default)]
pub struct FakeRunner {
    /// `(program, args)` per invocation, in call order.
    pub calls: Mutex<Vec<(String, Vec<String>)>>,
    results: Mutex<VecDeque<Result<CommandOutput>>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts a successful run with the given stdout.
    pub fn push_ok(&self, stdout: &str) {
        self.results.lock().unwrap().push_back(Ok(CommandOutput {
            success: true,
            stdout: stdout.to_string(),
            stderr: String::new(),
        }));
    }

    /// Scripts a non-zero exit with the given stderr.
    pub fn push_failure(&self, stderr: &str) {
        self.results.lock().unwrap().push_back(Ok(CommandOutput {
            success: false,
            stdout: String::new(),
            stderr: stderr.to_string(),
        }));
    }

    /// Scripts a spawn-level failure.
    pub fn push_err(&self, error: crate::error::Error) {
        self.results.lock().unwrap().push_back(Err(error));
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CommandRunner for FakeRunner {
    async fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput> {
        self.calls
            .lock()
            .unwrap()
            .push((program.to_string(), args.to_vec()));
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unscripted invocation of '{program}'"))
    }
}

/// Sink that records everything it is given, for assertions.
#[derive(Default)]
pub struct CaptureSink {
    pub notices: Mutex<Vec<Notification>>,
    pub outcomes: Mutex<Vec<DownloadOutcome>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Message texts of every captured notification, in order.
    pub fn messages(&self) -> Vec<String> {
        self.notices
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.message.clone())
            .collect()
    }
}

impl StatusSink for CaptureSink {
    fn notify(&self, notification: Notification) {
        self.notices.lock().unwrap().push(notification);
    }

    fn outcome(&self, outcome: &DownloadOutcome) {
        self.outcomes.lock().unwrap().push(outcome.clone());
    }
}
