use std::sync::Arc;

use tokio::sync::Mutex;

use crate::application::PanelSession;
use crate::domain::ports::CredentialStore;
use crate::infrastructure::http::SidApiClient;

/// Shared state of the panel host.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<PanelSession<SidApiClient>>>,
    pub api: Arc<SidApiClient>,
    pub store: Arc<dyn CredentialStore>,
}

impl AppState {
    pub fn new(
        session: PanelSession<SidApiClient>,
        api: Arc<SidApiClient>,
        store: Arc<dyn CredentialStore>,
    ) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            api,
            store,
        }
    }
}
