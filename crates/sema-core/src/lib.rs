//! SEMA Core
//!
//! Central coordination layer for the SEMA document Q&A client:
//! configuration, wiring of the service client into the session manager,
//! and logging setup. Rust owns all state; the presentation layer is a
//! stateless renderer over serializable snapshots.

mod config;
mod error;
mod workbench;

pub use config::{Config, DEFAULT_SERVICE_URL};
pub use error::CoreError;
pub use workbench::Workbench;

// Re-export core components
pub use sema_client::{DocumentService, HistoryRecord, HttpDocumentService, ServiceError};
pub use sema_session::{
    CallState, Document, DocumentUpload, Exchange, Session, SessionError, SessionManager,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
