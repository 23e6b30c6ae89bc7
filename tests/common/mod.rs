#![allow(dead_code)]

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use mockito::{Matcher, Mock, ServerGuard};
use serde_json::json;
use sid_url_manager::application::{ActionDispatcher, PanelSession};
use sid_url_manager::domain::entities::Credentials;
use sid_url_manager::domain::ports::{CredentialStore, SettingsEditor};
use sid_url_manager::infrastructure::credentials::MemoryCredentialStore;
use sid_url_manager::infrastructure::http::SidApiClient;
use sid_url_manager::infrastructure::surface::ChannelSurface;
use sid_url_manager::state::AppState;

pub const AUTH_ID: &str = "test-id";
pub const AUTH_KEY: &str = "test-key";

/// Counts how often the settings editor was asked to open.
#[derive(Default)]
pub struct CountingEditor {
    pub opened: AtomicUsize,
}

impl SettingsEditor for CountingEditor {
    fn open_settings(&self) -> io::Result<()> {
        self.opened.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

pub fn credentials() -> Credentials {
    Credentials::from_parts(Some(AUTH_ID.into()), Some(AUTH_KEY.into())).unwrap()
}

pub fn client_for(server: &ServerGuard) -> SidApiClient {
    SidApiClient::with_client(reqwest::Client::new(), server.url())
}

pub fn record_json(id: u64, short: &str) -> serde_json::Value {
    json!({
        "id": id,
        "long_url": format!("https://example.com/{short}"),
        "short": short,
    })
}

/// Mocks `GET /links?page=N` returning `records`.
pub async fn mock_list(
    server: &mut ServerGuard,
    page: u32,
    records: Vec<serde_json::Value>,
) -> Mock {
    server
        .mock("GET", "/links")
        .match_query(Matcher::UrlEncoded("page".into(), page.to_string()))
        .match_header("X-Auth-Id", AUTH_ID)
        .match_header("X-Auth-Key", AUTH_KEY)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "data": records }).to_string())
        .create_async()
        .await
}

/// Mocks `GET /links?count_only=true` returning `total`.
pub async fn mock_count(server: &mut ServerGuard, total: u64) -> Mock {
    server
        .mock("GET", "/links")
        .match_query(Matcher::UrlEncoded("count_only".into(), "true".into()))
        .match_header("X-Auth-Id", AUTH_ID)
        .match_header("X-Auth-Key", AUTH_KEY)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "total": total }).to_string())
        .create_async()
        .await
}

/// Panel host state talking to `server` with an in-memory credential pair.
pub fn create_test_state(server: &ServerGuard) -> (AppState, Arc<CountingEditor>) {
    let api = Arc::new(client_for(server));
    let store: Arc<dyn CredentialStore> =
        Arc::new(MemoryCredentialStore::with_credentials(&credentials()));
    let editor = Arc::new(CountingEditor::default());

    let (surface, outbox) = ChannelSurface::new();
    let dispatcher =
        ActionDispatcher::new(api.clone(), store.as_ref(), Arc::new(surface), editor.clone())
            .unwrap();

    let state = AppState::new(PanelSession::new(dispatcher, outbox), api, store);
    (state, editor)
}
