//! One-line URL count summary for status displays.

use tracing::warn;

use crate::domain::ports::{CredentialStore, ShortUrlApi, load_credentials};

pub const NOT_AUTHENTICATED_STATUS: &str = "Please set up authentication";
pub const COUNT_FAILED_STATUS: &str = "Failed to fetch URL count";

/// Returns the status line text for the configured account.
///
/// Never fails: missing credentials and count errors have their own texts.
pub async fn url_count_status<A: ShortUrlApi + ?Sized>(
    api: &A,
    store: &dyn CredentialStore,
) -> String {
    let Some(credentials) = load_credentials(store) else {
        return NOT_AUTHENTICATED_STATUS.to_string();
    };

    match api.count_total(&credentials).await {
        Ok(total) => format!("Number of URLs created: {total}"),
        Err(e) => {
            warn!(error = %e, detail = e.detail(), "Failed to fetch URL count");
            COUNT_FAILED_STATUS.to_string()
        }
    }
}
