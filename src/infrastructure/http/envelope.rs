//! Response envelopes of the remote short URL API.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::entities::ShortUrlRecord;
use crate::error::{ApiError, LIMIT_REACHED_CODE, LIMIT_REACHED_TOKEN};

/// Acknowledgement token returned by a successful rename.
pub const LINK_UPDATED_TOKEN: &str = "link_updated";

/// `GET /links?page=N`
#[derive(Debug, Deserialize)]
pub struct ListEnvelope {
    pub data: Option<Vec<ShortUrlRecord>>,
}

/// `GET /links?count_only=true`
#[derive(Debug, Deserialize)]
pub struct CountEnvelope {
    #[serde(default, deserialize_with = "lenient_count")]
    pub total: Option<u64>,
}

/// Accepts the count as an integer, an integral float or a numeric string.
/// Anything else reads as absent.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0)
                .map(|f| f as u64)
        }),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// `POST /links`
#[derive(Debug, Deserialize)]
pub struct CreateEnvelope {
    pub data: Option<CreatedLink>,
    #[serde(flatten)]
    pub status: ServiceStatus,
}

#[derive(Debug, Deserialize)]
pub struct CreatedLink {
    pub short: Option<String>,
}

/// `POST /links/{id}`
#[derive(Debug, Deserialize)]
pub struct UpdateEnvelope {
    #[serde(flatten)]
    pub status: ServiceStatus,
}

/// The `{code, message}` pair the service attaches to answers.
#[derive(Debug, Default, Deserialize)]
pub struct ServiceStatus {
    #[serde(default)]
    pub code: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ServiceStatus {
    /// Parses an arbitrary body, yielding an empty status for non-JSON input.
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    /// `code` as a number; the service sometimes sends it as a string.
    pub fn code(&self) -> Option<u16> {
        match self.code.as_ref()? {
            Value::Number(n) => n.as_u64().and_then(|c| u16::try_from(c).ok()),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn is_limit_reached(&self) -> bool {
        self.code() == Some(LIMIT_REACHED_CODE)
            && self.message.as_deref() == Some(LIMIT_REACHED_TOKEN)
    }

    /// Converts a limit signal into [`ApiError::RateLimit`], otherwise keeps `fallback`.
    pub fn limit_or(&self, fallback: ApiError) -> ApiError {
        if self.is_limit_reached() {
            ApiError::RateLimit(LIMIT_REACHED_TOKEN.to_string())
        } else {
            fallback
        }
    }
}
