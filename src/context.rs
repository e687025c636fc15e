//! App Context

use std::sync::Arc;

use crate::{
    api::{ClientConfig, HttpStorefrontClient, Session, StorefrontApi},
    config::BackendConfig,
    screens::{AlertSink, TracingAlerts},
};

/// Shared handles wired together at process start.
#[derive(Clone)]
pub struct AppContext {
    /// Typed client for the storefront backend.
    pub api: Arc<dyn StorefrontApi>,
    /// Sink for user-facing alerts.
    pub alerts: Arc<dyn AlertSink>,
    /// The bearer-token session shared with `api`.
    pub session: Session,
}

impl AppContext {
    /// Build the context from backend settings.
    ///
    /// A pre-configured token (flag or environment) starts the session
    /// already authenticated.
    #[must_use]
    pub fn from_backend_config(backend: &BackendConfig) -> Self {
        let session = Session::new();

        if let Some(token) = &backend.token {
            session.set_token(token);
        }

        let api = HttpStorefrontClient::new(
            ClientConfig {
                base_url: backend.base_url.clone(),
            },
            session.clone(),
        );

        Self {
            api: Arc::new(api),
            alerts: Arc::new(TracingAlerts),
            session,
        }
    }
}
