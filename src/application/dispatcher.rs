//! Action dispatcher: turns inbound surface messages into API calls and surface updates.

use std::sync::Arc;

use serde_json::Value;
use tracing::{error, info, warn};

use crate::application::services::RefreshService;
use crate::domain::entities::Credentials;
use crate::domain::messages::{ActionMessage, OutboundMessage};
use crate::domain::ports::{
    CredentialStore, DisplaySurface, SettingsEditor, ShortUrlApi, load_credentials,
};
use crate::error::ApiError;
pub use crate::utils::url_validation::{EMPTY_SHORT_TEXT, INVALID_URL_TEXT};
use crate::utils::url_validation::{is_valid_long_url, normalize_slug};

pub const GENERATED_TEXT: &str = "Short URL successfully generated.";
pub const UPDATED_TEXT: &str = "Short URL updated successfully.";
pub const FETCH_FAILED_TEXT: &str = "Failed to fetch URL list.";
pub const RENAME_LIMIT_TEXT: &str = "Limit reached: You cannot edit more short URLs today.";
pub const OPEN_SETTINGS_TEXT: &str = "Opening settings.json...";
pub const COPIED_TEXT: &str = "Short URL copied to clipboard.";

/// Handles one [`ActionMessage`] at a time for a single credential pair.
///
/// Every outcome, success or failure, is reported to the display surface;
/// no error escapes a dispatched action. Callers serialize calls to
/// [`ActionDispatcher::dispatch`] so that messages run to completion in
/// delivery order.
pub struct ActionDispatcher<A: ShortUrlApi> {
    api: Arc<A>,
    refresher: RefreshService<A>,
    credentials: Credentials,
    surface: Arc<dyn DisplaySurface>,
    settings: Arc<dyn SettingsEditor>,
}

impl<A: ShortUrlApi> ActionDispatcher<A> {
    /// Creates a dispatcher bound to the credentials currently in `store`.
    ///
    /// The pair is read once; later store changes do not affect this dispatcher.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Auth`] if the pair is missing or half configured.
    pub fn new(
        api: Arc<A>,
        store: &dyn CredentialStore,
        surface: Arc<dyn DisplaySurface>,
        settings: Arc<dyn SettingsEditor>,
    ) -> Result<Self, ApiError> {
        let credentials = load_credentials(store).ok_or_else(ApiError::not_authenticated)?;
        info!(auth_id = credentials.auth_id(), "Dispatcher ready");

        Ok(Self {
            refresher: RefreshService::new(api.clone()),
            api,
            credentials,
            surface,
            settings,
        })
    }

    /// Shows the first page, as done when the panel is first displayed.
    ///
    /// # Errors
    ///
    /// Returns the refresh error after reporting it to the surface.
    pub async fn open(&self) -> Result<(), ApiError> {
        match self.refresher.refresh(&self.credentials, 1).await {
            Ok(view) => {
                self.surface.post_message(view.into());
                Ok(())
            }
            Err(e) => {
                error!(error = %e, detail = e.detail(), "Failed to refresh URL list.");
                self.notify_failure(FETCH_FAILED_TEXT);
                Err(e)
            }
        }
    }

    /// Parses and dispatches a raw inbound payload.
    ///
    /// Unknown or malformed messages are reported as a failure notification.
    pub async fn dispatch_raw(&self, payload: Value) {
        match ActionMessage::from_value(payload) {
            Ok(message) => self.dispatch(message).await,
            Err(e) => {
                warn!(error = e.detail(), "Rejected inbound message");
                self.notify_failure(e.detail());
            }
        }
    }

    #[tracing::instrument(skip_all, fields(command = message.command()))]
    pub async fn dispatch(&self, message: ActionMessage) {
        match message {
            ActionMessage::GenerateUrl { long_url } => self.generate_url(&long_url).await,
            ActionMessage::EditUrl {
                id,
                new_short,
                long_url,
            } => self.edit_url(&id, &new_short, &long_url).await,
            ActionMessage::FetchUrls { page } => self.fetch_urls(page).await,
            ActionMessage::NotifyCopySuccess { message } => self.copy_success(message),
            ActionMessage::OpenSettingsJson => self.open_settings(),
        }
    }

    async fn generate_url(&self, long_url: &str) {
        if !is_valid_long_url(long_url) {
            self.notify_failure(INVALID_URL_TEXT);
            return;
        }

        match self.api.create_short(&self.credentials, long_url).await {
            Ok(short) => {
                info!(short = %short, "Short URL generated");
                self.refresh_after_change(GENERATED_TEXT).await;
            }
            Err(e) => {
                warn!(error = %e, detail = e.detail(), "Failed to generate short URL");
                self.notify_failure(format!("Failed to generate short URL: {e}"));
            }
        }
    }

    async fn edit_url(&self, id: &str, new_short: &str, long_url: &str) {
        let Some(new_short) = normalize_slug(new_short) else {
            self.notify_failure(EMPTY_SHORT_TEXT);
            return;
        };

        match self
            .api
            .rename_short(&self.credentials, id, new_short, long_url)
            .await
        {
            Ok(()) => {
                info!(id, new_short, "Short URL updated");
                self.refresh_after_change(UPDATED_TEXT).await;
            }
            Err(e) if e.is_rate_limit() => {
                error!(id, detail = e.detail(), "{e}");
                self.notify_failure(RENAME_LIMIT_TEXT);
            }
            Err(e) => {
                warn!(id, error = %e, detail = e.detail(), "Failed to update short URL");
                self.notify_failure(format!("Failed to update short URL: {e}"));
            }
        }
    }

    async fn fetch_urls(&self, page: Option<u32>) {
        let page = page.filter(|p| *p > 0).unwrap_or(1);

        match self.refresher.refresh(&self.credentials, page).await {
            Ok(view) => self.surface.post_message(view.into()),
            Err(e) => {
                error!(page, error = %e, detail = e.detail(), "Failed to refresh URL list.");
                self.notify_failure(FETCH_FAILED_TEXT);
            }
        }
    }

    fn copy_success(&self, message: String) {
        let message = if message.trim().is_empty() {
            COPIED_TEXT.to_string()
        } else {
            message
        };
        self.surface.post_message(OutboundMessage::success(message));
    }

    fn open_settings(&self) {
        if let Err(e) = self.settings.open_settings() {
            warn!(error = %e, "Failed to open settings editor");
        }
        self.surface
            .post_message(OutboundMessage::success(OPEN_SETTINGS_TEXT));
    }

    /// Returns to page 1 after a successful create or rename.
    ///
    /// A failed refresh still reports exactly one notification.
    async fn refresh_after_change(&self, success_text: &str) {
        match self.refresher.refresh(&self.credentials, 1).await {
            Ok(view) => {
                self.surface.post_message(view.into());
                self.surface
                    .post_message(OutboundMessage::success(success_text));
            }
            Err(e) => {
                error!(error = %e, detail = e.detail(), "Failed to refresh URL list.");
                self.notify_failure(format!("{success_text} Failed to refresh URL list: {e}"));
            }
        }
    }

    fn notify_failure(&self, message: impl Into<String>) {
        self.surface.post_message(OutboundMessage::failure(message));
    }
}
