//! Main application state container

use std::sync::Arc;
use std::time::Duration;

use sema_client::HttpDocumentService;
use sema_session::SessionManager;

use crate::config::Config;
use crate::Result;

/// Central container for the document Q&A client.
///
/// Owns the configuration and the session manager; the presentation
/// layer is a stateless renderer over session snapshots.
pub struct Workbench {
    config: Config,
    session: SessionManager,
}

impl Workbench {
    /// Wire up the service client and session manager from configuration.
    pub fn new(config: Config) -> Result<Self> {
        let service = HttpDocumentService::new(
            config.service_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )?;
        let session = SessionManager::new(Arc::new(service));

        Ok(Self { config, session })
    }

    /// Hydrate session state (best-effort history restore).
    pub async fn initialize(&self) {
        self.session.initialize().await;
        tracing::info!(service_url = %self.config.service_url, "Workbench initialized");
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
