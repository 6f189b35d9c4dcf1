//! Session Manager
//!
//! Mediates every state transition and every service call for one
//! session. All mutations happen on plain in-memory state behind a lock
//! that is never held across a network call; the per-operation call
//! states exist to reject a second logical invocation (a double click),
//! not to guard parallel writers.

use parking_lot::RwLock;
use std::sync::Arc;

use sema_client::DocumentService;

use crate::document::{Document, DocumentUpload};
use crate::error::SessionError;
use crate::exchange::Exchange;
use crate::session::{CallState, Session};
use crate::Result;

pub struct SessionManager {
    /// Remote document-intelligence service
    service: Arc<dyn DocumentService>,
    /// Session state, shared with snapshots only by value
    state: Arc<RwLock<Session>>,
}

impl SessionManager {
    pub fn new(service: Arc<dyn DocumentService>) -> Self {
        Self {
            service,
            state: Arc::new(RwLock::new(Session::new())),
        }
    }

    /// Hydrate the chat history from the service.
    ///
    /// History is advisory: when the fetch fails for any reason the
    /// session simply starts with an empty history and nothing is
    /// surfaced to the caller.
    pub async fn initialize(&self) {
        match self.service.fetch_history().await {
            Ok(records) => {
                let exchanges: Vec<Exchange> =
                    records.into_iter().map(Exchange::from_record).collect();

                let mut state = self.state.write();
                state.exchanges = exchanges;

                tracing::info!(restored = state.exchange_count(), "Session initialized");
            }
            Err(e) => {
                tracing::debug!(error = %e, "History unavailable, starting empty");
            }
        }
    }

    /// Upload a file, extract its text remotely, and make it the current
    /// document. The previous document survives a failed upload; the
    /// chat history and pending query survive a successful one.
    pub async fn upload_document(&self, upload: DocumentUpload) -> Result<Document> {
        {
            let mut state = self.state.write();
            if state.upload.is_in_flight() {
                return Err(SessionError::UploadInFlight);
            }
            state.upload = CallState::InFlight;
        }

        let DocumentUpload {
            file_name,
            mime_type,
            bytes,
        } = upload;
        let size_bytes = bytes.len() as u64;

        let outcome = self
            .service
            .extract_text(&file_name, &mime_type, bytes)
            .await;

        let mut state = self.state.write();
        state.upload = CallState::Idle;

        match outcome {
            Ok(text) => {
                let document = Document::new(file_name, mime_type, size_bytes, text);
                state.set_document(document.clone());

                tracing::info!(
                    document = %document.name,
                    size_bytes = document.size_bytes,
                    indexed = state.documents_indexed,
                    "Document uploaded"
                );

                Ok(document)
            }
            Err(e) => {
                tracing::warn!(document = %file_name, error = %e, "Upload failed");
                Err(SessionError::Upload(e))
            }
        }
    }

    /// Ask a question about the current document and record the exchange.
    ///
    /// Validation happens before anything reaches the network: a blank
    /// question and a missing document both fail locally. The stored
    /// question keeps the user's exact input; only the validation check
    /// trims.
    pub async fn submit_query(&self, question: &str) -> Result<Exchange> {
        if question.trim().is_empty() {
            return Err(SessionError::EmptyQuestion);
        }

        let context = {
            let mut state = self.state.write();
            let document = state
                .current_document
                .as_ref()
                .ok_or(SessionError::NoDocument)?;
            // Capture the context now; an upload finishing mid-query
            // must not switch which document this question runs against.
            let context = document.extracted_text.clone();

            if state.search.is_in_flight() {
                return Err(SessionError::SearchInFlight);
            }
            state.search = CallState::InFlight;
            context
        };

        let outcome = self.service.ask(question, &context).await;

        let mut state = self.state.write();
        state.search = CallState::Idle;

        match outcome {
            Ok(answer) => {
                let exchange = Exchange::new(question, answer);
                state.push_exchange(exchange.clone());
                state.pending_query.clear();

                tracing::info!(exchanges = state.exchange_count(), "Question answered");

                Ok(exchange)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Search failed");
                Err(SessionError::Search(e))
            }
        }
    }

    /// Clear the chat history, remotely and locally.
    ///
    /// A second clear arriving while one is outstanding is rejected, the
    /// same way the other two operations reject re-entrant calls.
    /// Clearing an already-empty history succeeds trivially.
    pub async fn clear_history(&self) -> Result<()> {
        {
            let mut state = self.state.write();
            if state.clear.is_in_flight() {
                return Err(SessionError::ClearInFlight);
            }
            state.clear = CallState::InFlight;
        }

        let outcome = self.service.clear_history().await;

        let mut state = self.state.write();
        state.clear = CallState::Idle;

        match outcome {
            Ok(()) => {
                state.exchanges.clear();
                tracing::info!("Chat history cleared");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "History clear failed");
                Err(SessionError::History(e))
            }
        }
    }

    // === State access ===

    /// Full session state by value, for the presentation layer.
    pub fn snapshot(&self) -> Session {
        self.state.read().clone()
    }

    pub fn current_document(&self) -> Option<Document> {
        self.state.read().current_document.clone()
    }

    pub fn exchanges(&self) -> Vec<Exchange> {
        self.state.read().exchanges.clone()
    }

    pub fn pending_query(&self) -> String {
        self.state.read().pending_query.clone()
    }

    pub fn set_pending_query(&self, query: impl Into<String>) {
        self.state.write().pending_query = query.into();
    }

    pub fn documents_indexed(&self) -> u32 {
        self.state.read().documents_indexed
    }

    pub fn is_uploading(&self) -> bool {
        self.state.read().upload.is_in_flight()
    }

    pub fn is_searching(&self) -> bool {
        self.state.read().search.is_in_flight()
    }
}

impl Clone for SessionManager {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            state: Arc::clone(&self.state),
        }
    }
}
