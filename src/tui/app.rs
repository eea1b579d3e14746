//! Application state model.

use std::sync::Arc;
use std::time::Instant;

use ratatui::widgets::ListState;
use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::notify::Notification;
use crate::process::{CommandRunner, SystemRunner};
use crate::session::Session;

use super::event::UiEvent;

/// Placeholder row shown when the search tool printed nothing.
pub const NO_PACKAGES: &str = "No packages found.";
/// Placeholder row shown when output was present but nothing parsed.
pub const NO_MATCHES: &str = "No relevant packages found after parsing.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Download,
    Compile,
    Export,
}

impl Tab {
    pub const ALL: [Self; 3] = [Self::Download, Self::Compile, Self::Export];

    pub const fn title(self) -> &'static str {
        match self {
            Self::Download => "Download",
            Self::Compile => "Compile",
            Self::Export => "Export",
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }
}

/// Which action currently owns the session's fate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    Search,
    Download,
}

/// A notification with its on-screen deadline.
#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    pub expires_at: Instant,
}

pub struct App {
    pub should_quit: bool,
    pub dark: bool,
    pub active_tab: Tab,
    // Search bar (Download tab)
    pub search_input: String,
    // Results list
    pub results_state: ListState,
    pub placeholder: Option<&'static str>,
    // Orchestration core state
    pub session: Session,
    /// Set while a worker task runs; new actions are rejected until the
    /// terminal event hands the session back.
    pub pending: Option<PendingAction>,
    // Status feed
    pub toasts: Vec<Toast>,
    // Wiring
    pub config: AppConfig,
    pub runner: Arc<dyn CommandRunner>,
    pub event_tx: mpsc::UnboundedSender<UiEvent>,
}

impl App {
    pub fn new(config: AppConfig, event_tx: mpsc::UnboundedSender<UiEvent>) -> Self {
        Self {
            should_quit: false,
            dark: true,
            active_tab: Tab::Download,
            search_input: String::new(),
            results_state: ListState::default(),
            placeholder: None,
            session: Session::new(),
            pending: None,
            toasts: Vec::new(),
            config,
            runner: Arc::new(SystemRunner),
            event_tx,
        }
    }

    #[must_use]
    pub const fn busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn next_tab(&mut self) {
        let next = (self.active_tab.index() + 1) % Tab::ALL.len();
        self.active_tab = Tab::ALL[next];
    }

    pub fn prev_tab(&mut self) {
        let index = self.active_tab.index();
        let prev = if index == 0 { Tab::ALL.len() - 1 } else { index - 1 };
        self.active_tab = Tab::ALL[prev];
    }

    pub fn move_cursor_up(&mut self) {
        let len = self.session.candidates.len();
        if len > 0 {
            let i = self.results_state.selected().unwrap_or(0);
            self.results_state
                .select(Some(if i == 0 { len - 1 } else { i - 1 }));
        }
    }

    pub fn move_cursor_down(&mut self) {
        let len = self.session.candidates.len();
        if len > 0 {
            let i = self.results_state.selected().unwrap_or(0);
            self.results_state.select(Some((i + 1) % len));
        }
    }

    /// Queues a toast, stamping the config default lifetime onto events
    /// that carry no hint of their own.
    pub fn push_toast(&mut self, notification: Notification) {
        let lifetime = notification
            .duration
            .unwrap_or_else(|| self.config.notify.default_duration());
        self.toasts.push(Toast {
            notification,
            expires_at: Instant::now() + lifetime,
        });
        // The feed is transient; keep only a short tail.
        if self.toasts.len() > 8 {
            self.toasts.remove(0);
        }
    }

    /// Drops toasts whose deadline has passed.
    pub fn prune_toasts(&mut self, now: Instant) {
        self.toasts.retain(|t| t.expires_at > now);
    }

    /// The toast currently owning the status line, newest first.
    #[must_use]
    pub fn active_toast(&self) -> Option<&Toast> {
        self.toasts.last()
    }
}
