use crate::errors::{AppError, AppResult};
use reqwest::header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::{Body, Client};
use tokio::fs::File;
use tokio_util::io::ReaderStream;

/// HTTP client bound to one authentication token for the whole run
pub struct ReleaseClient {
    client: Client,
    token: String,
}

impl ReleaseClient {
    pub fn new(token: &str) -> AppResult<Self> {
        let client = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self {
            client,
            token: token.to_string(),
        })
    }

    /// POST one asset to the upload endpoint. The body is streamed from the
    /// opened file; `content_length` must be the file's byte size so the
    /// stream is sent with known-length framing.
    pub async fn upload(&self, upload_url: &str, content_length: u64, file: File) -> AppResult<()> {
        let response = self
            .client
            .post(upload_url)
            .header(CONTENT_LENGTH, content_length)
            .header(CONTENT_TYPE, "application/octet-stream")
            .header(AUTHORIZATION, format!("token {}", self.token))
            .body(Body::wrap_stream(ReaderStream::new(file)))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(AppError::upload_failed(&format!(
            "endpoint returned {} for {}: {}",
            status, upload_url, error_text
        )))
    }
}
