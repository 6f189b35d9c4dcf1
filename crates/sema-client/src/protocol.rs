//! Wire protocol for the document-intelligence service
//!
//! The service answers every operation with a small JSON object. Failures
//! can arrive either as a non-2xx status or as an `{"error": ...}` payload
//! (the extraction backend emits both at once), so decoding checks the
//! payload before falling back to the status code.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;
use crate::Result;

/// One stored question/answer record as the history endpoint returns it.
/// Older deployments stored answers only, so `question` may be absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub answer: String,
    #[serde(default)]
    pub question: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ExtractResponse {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AskResponse {
    #[serde(default)]
    answer: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HistoryResponse {
    #[serde(default)]
    history: Vec<HistoryRecord>,
}

/// Decode an upload response into the extracted text.
/// Absent or empty `text` is a valid empty extraction, not an error.
pub(crate) fn decode_extract(status: StatusCode, body: &str) -> Result<String> {
    let payload: ExtractResponse = decode_body(status, body)?;
    if let Some(error) = payload.error {
        return Err(ServiceError::Rejected(error));
    }
    if !status.is_success() {
        return Err(ServiceError::Status(status));
    }
    Ok(payload.text.unwrap_or_default())
}

/// Decode an ask response into the answer text.
pub(crate) fn decode_ask(status: StatusCode, body: &str) -> Result<String> {
    let payload: AskResponse = decode_body(status, body)?;
    if let Some(error) = payload.error {
        return Err(ServiceError::Rejected(error));
    }
    if !status.is_success() {
        return Err(ServiceError::Status(status));
    }
    Ok(payload.answer.unwrap_or_default())
}

/// Decode a history fetch response into the stored records, preserving
/// the order the service returned them in.
pub(crate) fn decode_history(status: StatusCode, body: &str) -> Result<Vec<HistoryRecord>> {
    if !status.is_success() {
        return Err(ServiceError::Status(status));
    }
    let payload: HistoryResponse = decode_body(status, body)?;
    Ok(payload.history)
}

/// Decode a history clear response. Any 2xx counts; the body is ignored.
pub(crate) fn decode_clear(status: StatusCode) -> Result<()> {
    if !status.is_success() {
        return Err(ServiceError::Status(status));
    }
    Ok(())
}

fn decode_body<'a, T: Deserialize<'a>>(status: StatusCode, body: &'a str) -> Result<T> {
    match serde_json::from_str(body) {
        Ok(payload) => Ok(payload),
        // A non-JSON error page still maps to the status it came with
        Err(_) if !status.is_success() => Err(ServiceError::Status(status)),
        Err(e) => Err(ServiceError::Malformed(e.to_string())),
    }
}
