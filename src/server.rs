//! Panel host initialization and runtime setup.
//!
//! Builds the API client, reads the credential pair, opens the dispatcher
//! session and serves the display surface channel over HTTP.

use crate::application::{ActionDispatcher, PanelSession};
use crate::config::Config;
use crate::domain::ports::CredentialStore;
use crate::infrastructure::http::SidApiClient;
use crate::infrastructure::settings::EditorSettingsLauncher;
use crate::infrastructure::surface::ChannelSurface;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the shared state for `config` without binding a socket.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or the credential
/// pair is missing or incomplete.
pub fn build_state(config: &Config) -> Result<AppState> {
    let api = Arc::new(SidApiClient::new(
        config.api_base_url.clone(),
        config.http_timeout(),
    )?);

    let file_store = config.credential_store();
    let settings = Arc::new(EditorSettingsLauncher::new(file_store.clone()));
    let store: Arc<dyn CredentialStore> = Arc::new(file_store);

    let (surface, outbox) = ChannelSurface::new();
    let dispatcher = ActionDispatcher::new(api.clone(), store.as_ref(), Arc::new(surface), settings)
        .context("Run `sidctl auth` to store X-Auth-Id and X-Auth-Key")?;

    Ok(AppState::new(
        PanelSession::new(dispatcher, outbox),
        api,
        store,
    ))
}

/// Runs the panel host with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Credentials are not configured
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;
    tracing::info!("Panel session ready");

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
