//! SEMA Service Client
//!
//! Boundary to the remote document-intelligence service:
//! - Text extraction from an uploaded file
//! - Question answering against extracted document text
//! - Server-side chat history (fetch and clear)
//!
//! The service is an opaque collaborator; everything here is wire plumbing.

mod error;
mod protocol;
mod service;

pub use error::ServiceError;
pub use protocol::HistoryRecord;
pub use service::{DocumentService, HttpDocumentService};

pub type Result<T> = std::result::Result<T, ServiceError>;
