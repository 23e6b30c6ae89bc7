//! Short URL record as projected from the remote service.

use serde::{Deserialize, Deserializer, Serialize};

/// One short URL owned by the configured credential pair.
///
/// Records are transient: they are fetched per list call and never persisted
/// locally. The remote service assigns `id` and enforces `short` uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortUrlRecord {
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    pub long_url: String,
    pub short: String,
}

impl ShortUrlRecord {
    pub fn new(id: impl Into<String>, long_url: impl Into<String>, short: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            long_url: long_url.into(),
            short: short.into(),
        }
    }
}

/// Accepts ids sent either as JSON strings or as integers.
pub(crate) fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}
