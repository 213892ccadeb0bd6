use bytes::Bytes;
use reqwest::multipart::{Form, Part};

use crate::config::Config;
use crate::error::{ControllerError, ControllerResult};
use crate::models::{ParseResponse, SelectedFile};

/// HTTP client for the extraction service: one multipart parse call, one
/// binary download call. No timeouts and no retries; a hung request stays
/// pending until the server answers.
pub struct ParseClient {
    http: reqwest::Client,
    base_url: String,
}

impl ParseClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.base_url.clone())
    }

    /// Submits the selected document as a multipart `file` field and decodes
    /// the structured response. Transport failures, non-2xx statuses, and
    /// undecodable bodies all surface as `RequestFailed`.
    pub async fn parse(&self, file: &SelectedFile) -> ControllerResult<ParseResponse> {
        let part = Part::bytes(file.content.clone())
            .file_name(file.name.clone())
            .mime_str("application/pdf")
            .map_err(|e| ControllerError::request_failed(format!("invalid upload part: {}", e)))?;
        let form = Form::new().part("file", part);

        let response = self
            .http
            .post(format!("{}/parse", self.base_url))
            .multipart(form)
            .send()
            .await
            .map_err(|e| ControllerError::request_failed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ControllerError::request_failed(format!(
                "server returned status {}",
                status
            )));
        }

        response
            .json::<ParseResponse>()
            .await
            .map_err(|e| ControllerError::request_failed(format!("malformed response body: {}", e)))
    }

    /// Fetches the generated artifact for a previously parsed file as an
    /// opaque binary payload. The file name is percent-encoded into the
    /// path segment.
    pub async fn download(&self, file_name: &str) -> ControllerResult<Bytes> {
        let url = format!(
            "{}/download/{}",
            self.base_url,
            urlencoding::encode(file_name)
        );

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ControllerError::download_failed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ControllerError::download_failed(format!(
                "server returned status {}",
                status
            )));
        }

        response
            .bytes()
            .await
            .map_err(|e| ControllerError::download_failed(e.to_string()))
    }
}
