use std::time::Duration;

use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use fatura_core::{ErrorKind, ErrorReport, InvoiceExtractionResult, InvoiceFile, UploadId};
use fatura_logging::fatura_debug;

/// Fallback when no diagnostic text is available at all.
const GENERIC_FAILURE: &str = "error processing invoice";

#[derive(Debug, Clone)]
pub struct UploadSettings {
    /// Full extraction endpoint URL.
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8080/api/process-invoice/".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait::async_trait]
pub trait Uploader: Send + Sync {
    async fn upload(
        &self,
        upload_id: UploadId,
        file: &InvoiceFile,
    ) -> Result<InvoiceExtractionResult, ErrorReport>;
}

#[derive(Debug, Clone)]
pub struct ReqwestUploader {
    settings: UploadSettings,
}

impl ReqwestUploader {
    pub fn new(settings: UploadSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, ErrorReport> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| ErrorReport::new(ErrorKind::Unknown, or_generic(err.to_string())))
    }
}

#[async_trait::async_trait]
impl Uploader for ReqwestUploader {
    async fn upload(
        &self,
        upload_id: UploadId,
        file: &InvoiceFile,
    ) -> Result<InvoiceExtractionResult, ErrorReport> {
        let client = self.build_client()?;

        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.media_type)
            .map_err(|err| ErrorReport::new(ErrorKind::Unknown, or_generic(err.to_string())))?;
        let form = Form::new().part("file", part);

        fatura_debug!(
            "upload {} posting {} ({} bytes) to {}",
            upload_id,
            file.file_name,
            file.bytes.len(),
            self.settings.endpoint
        );

        let response = client
            .post(&self.settings.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.ok();
            return Err(rejection_report(status, body.as_deref()));
        }

        response
            .json::<InvoiceExtractionResult>()
            .await
            .map_err(map_transport_error)
    }
}

/// Classification for failures without a usable server payload, checked in
/// order: the client-side timeout fires before any response exists, then an
/// unreachable server, then everything else.
fn map_transport_error(err: reqwest::Error) -> ErrorReport {
    if err.is_timeout() {
        return ErrorReport::new(ErrorKind::Timeout, err.to_string());
    }
    if err.is_connect() {
        return ErrorReport::new(ErrorKind::NetworkUnavailable, err.to_string());
    }
    ErrorReport::new(ErrorKind::Unknown, or_generic(err.to_string()))
}

/// Non-2xx response: a JSON body carrying `detail` or `error` is an
/// application-level rejection; otherwise all we have is the status line.
fn rejection_report(status: reqwest::StatusCode, body: Option<&str>) -> ErrorReport {
    if let Some(message) = body.and_then(application_error) {
        return ErrorReport::new(ErrorKind::ServerRejected, message);
    }
    ErrorReport::new(ErrorKind::Unknown, or_generic(status.to_string()))
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// First non-empty of `detail`/`error` from a JSON error body, if any.
fn application_error(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    [parsed.detail, parsed.error]
        .into_iter()
        .flatten()
        .find(|message| !message.trim().is_empty())
}

fn or_generic(message: String) -> String {
    if message.trim().is_empty() {
        GENERIC_FAILURE.to_string()
    } else {
        message
    }
}
