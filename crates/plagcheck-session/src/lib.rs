//! plagcheck-session
//!
//! The submission flow: input buffer, view state, and the notifications the
//! interface shows. Exactly one request is in flight at a time; a re-entrant
//! submit while loading is a no-op, matching a disabled trigger control.

use tracing::warn;

use plagcheck_core::traits::AnalysisBackend;
use plagcheck_core::types::AnalysisResult;

pub const MSG_EMPTY_INPUT: &str = "Please enter some text first.";
pub const MSG_ANALYSIS_COMPLETE: &str = "Analysis complete!";
pub const MSG_UPLOAD_FAILED: &str = "Upload failed.";
pub const MSG_COPIED: &str = "Results copied to clipboard!";

/// What the interface is currently showing.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Idle,
    Loading,
    Success(AnalysisResult),
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Transient user-facing message, separate from the view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: &str) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.to_string(),
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.to_string(),
        }
    }
}

pub struct Session<B> {
    backend: B,
    input: String,
    state: ViewState,
    notification: Option<Notification>,
}

impl<B: AnalysisBackend> Session<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            input: String::new(),
            state: ViewState::Idle,
            notification: None,
        }
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading)
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// The current result, if the last submission succeeded.
    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.state {
            ViewState::Success(result) => Some(result),
            _ => None,
        }
    }

    /// Run one submission against the backend.
    ///
    /// Empty or whitespace-only input fails fast with the validation
    /// notification and no network call. Failures of any kind collapse into
    /// the one generic notification; a result from an earlier submission
    /// stays in place. Loading always clears, whatever the outcome. No
    /// retry, no timeout, no cancellation.
    pub async fn submit(&mut self) {
        if self.is_loading() {
            return;
        }
        if self.input.trim().is_empty() {
            self.notification = Some(Notification::error(MSG_EMPTY_INPUT));
            return;
        }
        self.notification = None;
        let previous = std::mem::replace(&mut self.state, ViewState::Loading);
        match self.backend.analyze(&self.input).await {
            Ok(result) => {
                self.state = ViewState::Success(result);
                self.notification = Some(Notification::success(MSG_ANALYSIS_COMPLETE));
            }
            Err(e) => {
                warn!("analysis request failed: {e}");
                self.state = match previous {
                    ViewState::Success(result) => ViewState::Success(result),
                    _ => ViewState::Error(e.to_string()),
                };
                self.notification = Some(Notification::error(MSG_UPLOAD_FAILED));
            }
        }
    }
}
