//! SEMA Session Management
//!
//! Owns all client-side state for one browsing session:
//! - The active document's extracted text and metadata
//! - The pending query string
//! - The chat history of question/answer exchanges
//! - Busy flags for the upload, search and clear operations
//!
//! Every state transition and every service call goes through
//! [`SessionManager`]; the presentation layer only ever sees serializable
//! snapshots.

mod document;
mod error;
mod exchange;
mod manager;
mod session;

pub use document::{Document, DocumentUpload};
pub use error::SessionError;
pub use exchange::Exchange;
pub use manager::SessionManager;
pub use session::{CallState, Session};

pub type Result<T> = std::result::Result<T, SessionError>;
