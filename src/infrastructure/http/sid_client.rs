//! HTTP implementation of [`ShortUrlApi`] for the s.id REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;
use url::Url;

use super::envelope::{
    CountEnvelope, CreateEnvelope, LINK_UPDATED_TOKEN, ListEnvelope, ServiceStatus, UpdateEnvelope,
};
use crate::domain::entities::{Credentials, ShortUrlRecord};
use crate::domain::ports::ShortUrlApi;
use crate::error::{ApiError, LIMIT_REACHED_TOKEN};
use crate::utils::url_validation::{
    EMPTY_SHORT_TEXT, INVALID_URL_TEXT, is_valid_long_url, normalize_slug,
};

/// Default base endpoint of the remote API.
pub const DEFAULT_BASE_URL: &str = "https://api.s.id/v1";

const AUTH_ID_HEADER: &str = "X-Auth-Id";
const AUTH_KEY_HEADER: &str = "X-Auth-Key";

/// Stateless client for the remote short URL service.
///
/// Every operation issues exactly one request with the `X-Auth-Id` /
/// `X-Auth-Key` headers. Failures are classified into [`ApiError`] kinds:
///
/// | Outcome | Error |
/// |---|---|
/// | no response | [`ApiError::Transport`] |
/// | 401 / 403 | [`ApiError::Auth`] |
/// | 404 | [`ApiError::NotFound`] |
/// | `{code: 422, message: "change_shortname_limit_reached"}` or 429 | [`ApiError::RateLimit`] |
/// | any other non-2xx | [`ApiError::Remote`] |
/// | 2xx without the expected envelope field | [`ApiError::Protocol`] |
#[derive(Debug, Clone)]
pub struct SidApiClient {
    http: Client,
    base_url: String,
}

impl SidApiClient {
    /// Builds a client for `base_url`.
    ///
    /// `timeout` of `None` keeps the transport default (no deadline).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the TLS backend cannot be initialised.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder
            .build()
            .map_err(|e| ApiError::Transport(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self::with_client(http, base_url))
    }

    /// Wraps an existing `reqwest` client.
    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `{base}/links/{id}` with `id` percent-encoded as a single path segment.
    fn link_url(&self, id: &str) -> Result<Url, ApiError> {
        let id = id.trim();
        if id.is_empty() || id == "." || id == ".." {
            return Err(ApiError::validation(format!("Invalid short URL id: `{id}`")));
        }

        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ApiError::Transport(format!("Invalid base URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Transport("Base URL cannot carry a path".to_string()))?
            .pop_if_empty()
            .push("links")
            .push(id);
        Ok(url)
    }

    fn authed(&self, request: RequestBuilder, credentials: &Credentials) -> RequestBuilder {
        request
            .header(AUTH_ID_HEADER, credentials.auth_id())
            .header(AUTH_KEY_HEADER, credentials.auth_key())
    }

    /// Sends the request and decodes a successful body as `T`.
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(classify_failure(status, &body));
        }

        serde_json::from_str(&body).map_err(|e| {
            let status = ServiceStatus::from_body(&body);
            status.limit_or(ApiError::protocol(format!("Invalid JSON body: {e}")))
        })
    }
}

/// Maps a non-2xx answer to an [`ApiError`] kind.
pub fn classify_failure(status: StatusCode, body: &str) -> ApiError {
    let service = ServiceStatus::from_body(body);
    if service.is_limit_reached() {
        return ApiError::RateLimit(LIMIT_REACHED_TOKEN.to_string());
    }

    let detail = service
        .message
        .clone()
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Auth(detail),
        StatusCode::NOT_FOUND => ApiError::NotFound(detail),
        StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimit(detail),
        _ => ApiError::Remote {
            status: status.as_u16(),
            message: service
                .message
                .unwrap_or_else(|| "An unknown error occurred.".to_string()),
        },
    }
}

#[async_trait]
impl ShortUrlApi for SidApiClient {
    async fn list_page(
        &self,
        credentials: &Credentials,
        page: u32,
    ) -> Result<Vec<ShortUrlRecord>, ApiError> {
        debug!(page, "Listing short URLs");
        let request = self
            .http
            .get(self.endpoint("links"))
            .query(&[("page", page)]);

        let envelope: ListEnvelope = self.execute(self.authed(request, credentials)).await?;
        envelope
            .data
            .ok_or_else(|| ApiError::protocol("list response is missing `data`"))
    }

    async fn count_total(&self, credentials: &Credentials) -> Result<u64, ApiError> {
        debug!("Counting short URLs");
        let request = self
            .http
            .get(self.endpoint("links"))
            .query(&[("count_only", "true")]);

        let envelope: CountEnvelope = self.execute(self.authed(request, credentials)).await?;
        envelope
            .total
            .ok_or_else(|| ApiError::protocol("count response is missing `total`"))
    }

    async fn create_short(
        &self,
        credentials: &Credentials,
        long_url: &str,
    ) -> Result<String, ApiError> {
        if !is_valid_long_url(long_url) {
            return Err(ApiError::validation(INVALID_URL_TEXT));
        }

        let request = self
            .http
            .post(self.endpoint("links"))
            .json(&json!({ "long_url": long_url.trim() }));

        let envelope: CreateEnvelope = self.execute(self.authed(request, credentials)).await?;
        match envelope.data.and_then(|d| d.short).filter(|s| !s.is_empty()) {
            Some(short) => Ok(short),
            None => Err(envelope
                .status
                .limit_or(ApiError::protocol("create response is missing `data.short`"))),
        }
    }

    async fn rename_short(
        &self,
        credentials: &Credentials,
        id: &str,
        new_short: &str,
        long_url: &str,
    ) -> Result<(), ApiError> {
        let Some(new_short) = normalize_slug(new_short) else {
            return Err(ApiError::validation(EMPTY_SHORT_TEXT));
        };

        let url = self.link_url(id)?;
        debug!(id, new_short, %url, "Renaming short URL");
        let request = self
            .http
            .post(url)
            .json(&json!({ "short": new_short, "long_url": long_url }));

        let envelope: UpdateEnvelope = self.execute(self.authed(request, credentials)).await?;
        if envelope.status.message.as_deref() == Some(LINK_UPDATED_TOKEN) {
            Ok(())
        } else {
            let found = envelope.status.message.clone().unwrap_or_default();
            Err(envelope.status.limit_or(ApiError::protocol(format!(
                "expected `{LINK_UPDATED_TOKEN}` acknowledgement, got `{found}`"
            ))))
        }
    }
}
