use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use plagcheck_core::traits::AnalysisBackend;
use plagcheck_core::types::AnalysisResult;
use plagcheck_core::{Error, Result};
use plagcheck_session::{
    NotificationKind, Session, ViewState, MSG_ANALYSIS_COMPLETE, MSG_EMPTY_INPUT, MSG_UPLOAD_FAILED,
};

/// Echoes the submitted text back with no matches, counting calls.
struct CountingBackend {
    calls: Arc<AtomicUsize>,
}

impl CountingBackend {
    fn new() -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

#[async_trait::async_trait]
impl AnalysisBackend for CountingBackend {
    async fn analyze(&self, text: &str) -> Result<AnalysisResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(AnalysisResult {
            full_text: text.to_string(),
            fragment_matches: vec![],
        })
    }
}

/// Always fails with a server error.
struct FailingBackend;

#[async_trait::async_trait]
impl AnalysisBackend for FailingBackend {
    async fn analyze(&self, _text: &str) -> Result<AnalysisResult> {
        Err(Error::Http(500))
    }
}

/// Succeeds on the first call, fails on every call after that.
struct FlakyBackend {
    calls: AtomicUsize,
}

#[async_trait::async_trait]
impl AnalysisBackend for FlakyBackend {
    async fn analyze(&self, text: &str) -> Result<AnalysisResult> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            Ok(AnalysisResult {
                full_text: text.to_string(),
                fragment_matches: vec![],
            })
        } else {
            Err(Error::Network("connection reset".to_string()))
        }
    }
}

#[tokio::test]
async fn empty_input_never_reaches_the_backend() {
    let (backend, calls) = CountingBackend::new();
    let mut session = Session::new(backend);
    session.set_input("   \n\t ");
    session.submit().await;

    let n = session.notification().expect("notification");
    assert_eq!(n.kind, NotificationKind::Error);
    assert_eq!(n.message, MSG_EMPTY_INPUT);
    assert_eq!(*session.state(), ViewState::Idle);
    assert_eq!(calls.load(Ordering::SeqCst), 0, "no network call");
}

#[tokio::test]
async fn successful_submission_sets_result_and_notification() {
    let (backend, calls) = CountingBackend::new();
    let mut session = Session::new(backend);
    session.set_input("The cat sat.");
    session.submit().await;

    assert!(!session.is_loading());
    assert_eq!(calls.load(Ordering::SeqCst), 1, "exactly one request");
    let result = session.result().expect("result");
    assert_eq!(result.full_text, "The cat sat.");
    let n = session.notification().expect("notification");
    assert_eq!(n.kind, NotificationKind::Success);
    assert_eq!(n.message, MSG_ANALYSIS_COMPLETE);
}

#[tokio::test]
async fn failure_without_prior_result_enters_error_state() {
    let mut session = Session::new(FailingBackend);
    session.set_input("some text");
    session.submit().await;

    assert!(!session.is_loading());
    assert!(session.result().is_none());
    assert!(matches!(session.state(), ViewState::Error(_)));
    let n = session.notification().expect("notification");
    assert_eq!(n.kind, NotificationKind::Error);
    assert_eq!(n.message, MSG_UPLOAD_FAILED);
}

#[tokio::test]
async fn failure_keeps_the_previous_result() {
    let mut session = Session::new(FlakyBackend {
        calls: AtomicUsize::new(0),
    });
    session.set_input("The cat sat.");
    session.submit().await;
    assert!(session.result().is_some());

    session.set_input("Different text.");
    session.submit().await;

    assert!(!session.is_loading());
    // the earlier result is untouched
    let result = session.result().expect("previous result");
    assert_eq!(result.full_text, "The cat sat.");
    let n = session.notification().expect("notification");
    assert_eq!(n.message, MSG_UPLOAD_FAILED);
}
