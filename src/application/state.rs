// src/application/state.rs
//
// Composition root shared by every command.

use std::sync::Arc;

use super::error_handling::ErrorNormalizer;
use super::snackbar::SnackbarStore;
use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::integrations::http::{HttpTransport, Transport};
use crate::services::SelectionService;

/// All fields are Arc-wrapped so commands can share them freely.
pub struct AppState {
    pub api: Arc<ApiClient>,
    pub selection: Arc<SelectionService>,
    pub snackbar: Arc<SnackbarStore>,
}

impl AppState {
    /// Wire the HTTP transport described by `config`.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let transport = HttpTransport::new(config.api_base_url.clone(), config.timeout())?;
        Ok(Self::from_parts(Arc::new(transport), &config.origin))
    }

    /// Wire everything above an already-built transport.
    pub fn from_parts(transport: Arc<dyn Transport>, origin: &str) -> Self {
        let snackbar = Arc::new(SnackbarStore::new());
        let normalizer = ErrorNormalizer::new(snackbar.clone());
        let api = Arc::new(ApiClient::new(transport, normalizer, origin));
        let selection = Arc::new(SelectionService::new(api.clone()));

        Self {
            api,
            selection,
            snackbar,
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("api", &self.api)
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}
