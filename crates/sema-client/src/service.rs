//! Document service trait and HTTP implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use url::Url;

use crate::error::ServiceError;
use crate::protocol::{decode_ask, decode_clear, decode_extract, decode_history};
use crate::{HistoryRecord, Result};

/// Remote document-intelligence operations.
///
/// The session layer talks to the service only through this trait, so
/// tests can stand in a scripted implementation.
#[async_trait]
pub trait DocumentService: Send + Sync {
    /// Upload a file and get its extracted text back.
    async fn extract_text(&self, file_name: &str, mime_type: &str, bytes: Vec<u8>)
        -> Result<String>;

    /// Ask a question against previously extracted document text.
    async fn ask(&self, question: &str, context: &str) -> Result<String>;

    /// Fetch the server-side chat history, oldest ordering as stored.
    async fn fetch_history(&self) -> Result<Vec<HistoryRecord>>;

    /// Delete the server-side chat history.
    async fn clear_history(&self) -> Result<()>;
}

/// HTTP client for the document-intelligence service.
pub struct HttpDocumentService {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpDocumentService {
    /// Build a client against the given base URL with a bounded
    /// per-request timeout. A hung call surfaces as a transport error
    /// when the timeout expires instead of staying outstanding forever.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        // Normalize so joining relative paths keeps the base path intact
        let mut base_url = base_url;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }
}

#[async_trait]
impl DocumentService for HttpDocumentService {
    async fn extract_text(
        &self,
        file_name: &str,
        mime_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String> {
        let mut part = Part::bytes(bytes).file_name(file_name.to_owned());
        if !mime_type.is_empty() {
            part = part
                .mime_str(mime_type)
                .map_err(|_| ServiceError::Mime(mime_type.to_owned()))?;
        }
        let form = Form::new().part("file", part);

        tracing::debug!(file_name = %file_name, "Uploading file for extraction");

        let response = self
            .client
            .post(self.endpoint("upload")?)
            .multipart(form)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        decode_extract(status, &body)
    }

    async fn ask(&self, question: &str, context: &str) -> Result<String> {
        tracing::debug!(context_len = context.len(), "Submitting question");

        let response = self
            .client
            .post(self.endpoint("ask")?)
            .form(&[("question", question), ("context", context)])
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        decode_ask(status, &body)
    }

    async fn fetch_history(&self) -> Result<Vec<HistoryRecord>> {
        let response = self.client.get(self.endpoint("history")?).send().await?;
        let status = response.status();
        let body = response.text().await?;

        decode_history(status, &body)
    }

    async fn clear_history(&self) -> Result<()> {
        let response = self
            .client
            .delete(self.endpoint("history/clear")?)
            .send()
            .await?;

        decode_clear(response.status())
    }
}
