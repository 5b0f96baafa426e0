//! Transport seam for the upload controller.
//!
//! The controller never talks HTTP directly; it goes through this trait so
//! tests can substitute a stub and the error-handling paths stay reachable
//! without a live server.

use async_trait::async_trait;

/// Raw outcome of a resume upload: did the server accept it, and what did
/// the body say. Body interpretation (success report vs error object) is the
/// controller's job.
#[derive(Debug, Clone)]
pub struct UploadResponse {
    pub success: bool,
    pub body: String,
}

#[async_trait]
pub trait AnalyzeTransport: Send + Sync {
    /// Posts the file as a multipart body with a single `resume` part.
    async fn post_resume(&self, filename: &str, bytes: Vec<u8>) -> anyhow::Result<UploadResponse>;
}

/// Reqwest-backed transport against a running analysis service.
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// `base_url` is the service root, e.g. `http://localhost:8080`.
    pub fn new(base_url: &str) -> Self {
        HttpTransport {
            client: reqwest::Client::new(),
            endpoint: format!("{}/analyze", base_url.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl AnalyzeTransport for HttpTransport {
    async fn post_resume(&self, filename: &str, bytes: Vec<u8>) -> anyhow::Result<UploadResponse> {
        tracing::debug!(endpoint = %self.endpoint, %filename, "Uploading resume");

        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_string());
        let form = reqwest::multipart::Form::new().part("resume", part);

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;

        let success = response.status().is_success();
        let body = response.text().await?;

        Ok(UploadResponse { success, body })
    }
}
