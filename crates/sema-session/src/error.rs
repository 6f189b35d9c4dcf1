//! Session error types

use thiserror::Error;

use sema_client::ServiceError;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Question cannot be empty")]
    EmptyQuestion,

    #[error("No document has been uploaded")]
    NoDocument,

    #[error("An upload is already in progress")]
    UploadInFlight,

    #[error("A search is already in progress")]
    SearchInFlight,

    #[error("A history clear is already in progress")]
    ClearInFlight,

    #[error("Upload failed: {0}")]
    Upload(#[source] ServiceError),

    #[error("Search failed: {0}")]
    Search(#[source] ServiceError),

    #[error("History clear failed: {0}")]
    History(#[source] ServiceError),
}

impl SessionError {
    /// True for local precondition failures that never reached the network.
    pub fn is_validation(&self) -> bool {
        matches!(self, SessionError::EmptyQuestion | SessionError::NoDocument)
    }

    /// True when a re-entrant call was rejected by an in-flight guard.
    pub fn is_concurrency(&self) -> bool {
        matches!(
            self,
            SessionError::UploadInFlight
                | SessionError::SearchInFlight
                | SessionError::ClearInFlight
        )
    }
}
