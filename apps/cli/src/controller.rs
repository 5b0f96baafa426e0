//! Upload controller — drives one resume submission end to end.
//!
//! The flow mirrors the browser frontend exactly: precondition check, enter
//! loading state, multipart POST, render on success, surface every failure
//! class through the same recovery point with an "Error: " prefix. The
//! loading indicator is cleared on every exit path. At most one submission
//! may be in flight at a time; later submissions are rejected without a
//! network call while one is pending.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;

use crate::model::{AnalysisReport, ErrorBody};
use crate::render::{AnalysisView, ReportView};
use crate::transport::AnalyzeTransport;

const NO_FILE_MSG: &str = "Please select a file to upload.";
const GENERIC_ERROR_MSG: &str = "Something went wrong";

#[derive(Debug, Error)]
pub enum UploadError {
    /// No file path given, or the path does not exist. No request is made.
    #[error("Please select a file to upload.")]
    NoFileSelected,

    /// A submission is already pending. No request is made.
    #[error("An analysis is already in progress.")]
    AlreadyPending,

    /// The server rejected the upload (non-2xx) with an error message.
    #[error("{0}")]
    Rejected(String),

    /// Network failure, file read failure, or malformed response body.
    #[error("{0}")]
    Transport(String),
}

pub struct UploadController<T, V> {
    transport: T,
    view: V,
    in_flight: AtomicBool,
}

impl<T: AnalyzeTransport, V: AnalysisView> UploadController<T, V> {
    pub fn new(transport: T, view: V) -> Self {
        UploadController {
            transport,
            view,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Submits `file` for analysis and renders the outcome through the view.
    ///
    /// Returns the failure (also already surfaced via the view) so callers
    /// can set an exit code.
    pub async fn submit(&self, file: Option<&Path>) -> Result<(), UploadError> {
        let path = match file {
            Some(p) if p.exists() => p,
            _ => {
                self.view.show_error(NO_FILE_MSG);
                return Err(UploadError::NoFileSelected);
            }
        };

        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(UploadError::AlreadyPending);
        }

        // Loading state is entered before the request is issued and cleared
        // unconditionally once the request settles.
        self.view.start_loading();
        let result = self.perform(path).await;
        self.view.finish_loading();
        self.in_flight.store(false, Ordering::SeqCst);

        match result {
            Ok(report) => {
                self.view.render(&ReportView::from_report(&report));
                Ok(())
            }
            Err(e) => {
                self.view.show_error(&format!("Error: {e}"));
                Err(e)
            }
        }
    }

    async fn perform(&self, path: &Path) -> Result<AnalysisReport, UploadError> {
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            UploadError::Transport(format!("Failed to read {}: {e}", path.display()))
        })?;

        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("resume")
            .to_string();

        let response = self
            .transport
            .post_resume(&filename, bytes)
            .await
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        if !response.success {
            let message = serde_json::from_str::<ErrorBody>(&response.body)
                .ok()
                .and_then(|b| b.error)
                .unwrap_or_else(|| GENERIC_ERROR_MSG.to_string());
            return Err(UploadError::Rejected(message));
        }

        serde_json::from_str::<AnalysisReport>(&response.body)
            .map_err(|e| UploadError::Transport(format!("Malformed response: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::UploadResponse;
    use async_trait::async_trait;
    use std::io::Write;
    use std::path::PathBuf;
    use std::sync::atomic::AtomicUsize;
    use std::sync::{Arc, Mutex};

    /// What the view observed, in order.
    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        LoadingStarted,
        LoadingFinished,
        Error(String),
        Rendered(String), // score_text, enough to identify the render
    }

    #[derive(Default)]
    struct RecordingView {
        events: Arc<Mutex<Vec<Event>>>,
    }

    impl RecordingView {
        /// Handle that stays valid after the view moves into the controller.
        fn handle(&self) -> Arc<Mutex<Vec<Event>>> {
            self.events.clone()
        }
    }

    impl AnalysisView for RecordingView {
        fn start_loading(&self) {
            self.events.lock().unwrap().push(Event::LoadingStarted);
        }
        fn finish_loading(&self) {
            self.events.lock().unwrap().push(Event::LoadingFinished);
        }
        fn show_error(&self, message: &str) {
            self.events
                .lock()
                .unwrap()
                .push(Event::Error(message.to_string()));
        }
        fn render(&self, view: &ReportView) {
            self.events
                .lock()
                .unwrap()
                .push(Event::Rendered(view.score_text.clone()));
        }
    }

    fn events_of(handle: &Arc<Mutex<Vec<Event>>>) -> Vec<Event> {
        handle.lock().unwrap().clone()
    }

    /// Stub transport returning a canned response and counting calls.
    struct StubTransport {
        response: UploadResponse,
        calls: Arc<AtomicUsize>,
    }

    impl StubTransport {
        fn new(success: bool, body: &str) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (
                StubTransport {
                    response: UploadResponse {
                        success,
                        body: body.to_string(),
                    },
                    calls: calls.clone(),
                },
                calls,
            )
        }
    }

    #[async_trait]
    impl AnalyzeTransport for StubTransport {
        async fn post_resume(
            &self,
            _filename: &str,
            _bytes: Vec<u8>,
        ) -> anyhow::Result<UploadResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.response.clone())
        }
    }

    /// Transport that fails at the network level.
    struct FailingTransport;

    #[async_trait]
    impl AnalyzeTransport for FailingTransport {
        async fn post_resume(
            &self,
            _filename: &str,
            _bytes: Vec<u8>,
        ) -> anyhow::Result<UploadResponse> {
            anyhow::bail!("connection refused")
        }
    }

    /// Temp file that cleans itself up; tests need a real path on disk.
    struct TempResume(PathBuf);

    impl TempResume {
        fn create(tag: &str) -> Self {
            let path = std::env::temp_dir().join(format!(
                "atscore-test-{}-{tag}.pdf",
                std::process::id()
            ));
            let mut f = std::fs::File::create(&path).unwrap();
            f.write_all(b"resume bytes").unwrap();
            TempResume(path)
        }

        fn path(&self) -> &Path {
            &self.0
        }
    }

    impl Drop for TempResume {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.0);
        }
    }

    const SUCCESS_BODY: &str = r#"{
        "score": 82,
        "details": {
            "email": "a@b.com",
            "phone": "555-0100",
            "skills": ["Go", "SQL"],
            "analysis_notes": ["Strong backend match"]
        }
    }"#;

    #[tokio::test]
    async fn test_no_file_never_issues_a_request() {
        let (transport, calls) = StubTransport::new(true, SUCCESS_BODY);
        let view = RecordingView::default();
        let events = view.handle();
        let controller = UploadController::new(transport, view);

        let err = controller.submit(None).await.unwrap_err();

        assert!(matches!(err, UploadError::NoFileSelected));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(
            events_of(&events),
            vec![Event::Error("Please select a file to upload.".to_string())]
        );
    }

    #[tokio::test]
    async fn test_missing_path_counts_as_no_file() {
        let (transport, calls) = StubTransport::new(true, SUCCESS_BODY);
        let controller = UploadController::new(transport, RecordingView::default());

        let err = controller
            .submit(Some(Path::new("/nonexistent/resume.pdf")))
            .await
            .unwrap_err();

        assert!(matches!(err, UploadError::NoFileSelected));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_success_renders_report_and_clears_loading() {
        let (transport, _) = StubTransport::new(true, SUCCESS_BODY);
        let view = RecordingView::default();
        let events = view.handle();
        let controller = UploadController::new(transport, view);
        let file = TempResume::create("success");

        controller.submit(Some(file.path())).await.unwrap();

        assert_eq!(
            events_of(&events),
            vec![
                Event::LoadingStarted,
                Event::LoadingFinished,
                Event::Rendered("82%".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_rejection_without_error_field_uses_generic_message() {
        let (transport, _) = StubTransport::new(false, "{}");
        let view = RecordingView::default();
        let events = view.handle();
        let controller = UploadController::new(transport, view);
        let file = TempResume::create("generic");

        let err = controller.submit(Some(file.path())).await.unwrap_err();

        assert!(matches!(err, UploadError::Rejected(_)));
        assert!(events_of(&events)
            .contains(&Event::Error("Error: Something went wrong".to_string())));
    }

    #[tokio::test]
    async fn test_rejection_message_comes_from_error_field() {
        let (transport, _) = StubTransport::new(false, r#"{"error":"file too large"}"#);
        let view = RecordingView::default();
        let events = view.handle();
        let controller = UploadController::new(transport, view);
        let file = TempResume::create("rejected");

        controller.submit(Some(file.path())).await.unwrap_err();

        assert!(events_of(&events).contains(&Event::Error("Error: file too large".to_string())));
    }

    #[tokio::test]
    async fn test_transport_failure_still_clears_loading() {
        let view = RecordingView::default();
        let events = view.handle();
        let controller = UploadController::new(FailingTransport, view);
        let file = TempResume::create("transport");

        let err = controller.submit(Some(file.path())).await.unwrap_err();

        assert!(matches!(err, UploadError::Transport(_)));
        let events = events_of(&events);
        assert_eq!(events[0], Event::LoadingStarted);
        assert_eq!(events[1], Event::LoadingFinished);
        assert!(matches!(&events[2], Event::Error(m) if m == "Error: connection refused"));
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_a_transport_error() {
        let (transport, _) = StubTransport::new(true, "not json");
        let view = RecordingView::default();
        let events = view.handle();
        let controller = UploadController::new(transport, view);
        let file = TempResume::create("malformed");

        let err = controller.submit(Some(file.path())).await.unwrap_err();

        assert!(matches!(err, UploadError::Transport(_)));
        let events = events_of(&events);
        assert!(matches!(events.last(), Some(Event::Error(m)) if m.starts_with("Error: ")));
    }

    #[tokio::test]
    async fn test_second_submission_while_pending_is_rejected() {
        use tokio::sync::Notify;

        /// Transport that parks until released, so a submission stays pending.
        struct ParkedTransport {
            entered: Arc<Notify>,
            release: Arc<Notify>,
        }

        #[async_trait]
        impl AnalyzeTransport for ParkedTransport {
            async fn post_resume(
                &self,
                _filename: &str,
                _bytes: Vec<u8>,
            ) -> anyhow::Result<UploadResponse> {
                self.entered.notify_one();
                self.release.notified().await;
                Ok(UploadResponse {
                    success: true,
                    body: SUCCESS_BODY.to_string(),
                })
            }
        }

        let entered = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        let view = RecordingView::default();
        let events = view.handle();
        let controller = Arc::new(UploadController::new(
            ParkedTransport {
                entered: entered.clone(),
                release: release.clone(),
            },
            view,
        ));
        let file = TempResume::create("pending");
        let path = file.path().to_path_buf();

        let first = {
            let controller = controller.clone();
            tokio::spawn(async move { controller.submit(Some(&path)).await })
        };
        entered.notified().await;

        // First submission is parked inside the transport; a second one must
        // be turned away without touching the loading state.
        let err = controller.submit(Some(file.path())).await.unwrap_err();
        assert!(matches!(err, UploadError::AlreadyPending));

        release.notify_one();
        first.await.unwrap().unwrap();

        let starts = events_of(&events)
            .iter()
            .filter(|e| **e == Event::LoadingStarted)
            .count();
        assert_eq!(starts, 1);
    }
}
