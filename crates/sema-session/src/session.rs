//! Session state container
//!
//! Upload, search and clear each run through the same two-state machine:
//!
//! ```text
//! Idle
//!   ↓ start (rejected while a call of the same kind is outstanding)
//! InFlight
//!   ↓ success | failure
//! Idle
//! ```

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::exchange::Exchange;

/// State of one kind of service call. A second call of the same kind is
/// rejected while one is outstanding; there is no queue and no retry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallState {
    /// No call of this kind is outstanding
    #[default]
    Idle,
    /// Exactly one call of this kind is outstanding
    InFlight,
}

impl CallState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, CallState::InFlight)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CallState::Idle => "idle",
            CallState::InFlight => "inflight",
        }
    }
}

impl std::fmt::Display for CallState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// All client-side state for one browsing session, as plain serializable
/// values. Created at session start, mutated in place by the session
/// manager, discarded at process exit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    /// The one retained document; a new upload replaces it
    pub current_document: Option<Document>,
    /// Query text the user is composing
    pub pending_query: String,
    /// Question/answer history in chronological order
    pub exchanges: Vec<Exchange>,
    /// Upload call state
    pub upload: CallState,
    /// Search call state
    pub search: CallState,
    /// History clear call state
    pub clear: CallState,
    /// Successful uploads this session
    pub documents_indexed: u32,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the retained document and bump the session upload counter.
    /// Exchanges and the pending query are deliberately untouched.
    pub fn set_document(&mut self, document: Document) {
        self.current_document = Some(document);
        self.documents_indexed += 1;
    }

    /// Append an exchange at the back, keeping chronological order.
    pub fn push_exchange(&mut self, exchange: Exchange) {
        self.exchanges.push(exchange);
    }

    pub fn exchange_count(&self) -> usize {
        self.exchanges.len()
    }
}
