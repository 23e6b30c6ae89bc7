//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before use.
//!
//! ## Variables
//!
//! - `SID_API_BASE_URL` - Remote API base endpoint (default: `https://api.s.id/v1`)
//! - `LISTEN` - Panel host bind address (default: `127.0.0.1:3210`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `SID_SETTINGS_PATH` - Global settings file
//!   (default: `<config dir>/sid-url-manager/settings.json`)
//! - `SID_WORKSPACE_SETTINGS` - Optional workspace settings file, read before the global one
//! - `HTTP_TIMEOUT_SECS` - Optional request timeout; unset means no deadline

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use url::Url;

use crate::infrastructure::credentials::JsonFileCredentialStore;
use crate::infrastructure::http::DEFAULT_BASE_URL;

const APP_DIR: &str = "sid-url-manager";
const SETTINGS_FILE: &str = "settings.json";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub settings_path: PathBuf,
    pub workspace_settings_path: Option<PathBuf>,
    pub http_timeout_secs: Option<u64>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if no settings path is given and the platform has no
    /// configuration directory, or if a numeric variable does not parse.
    pub fn from_env() -> Result<Self> {
        let api_base_url =
            env::var("SID_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "127.0.0.1:3210".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let settings_path = Self::load_settings_path()?;
        let workspace_settings_path = env::var_os("SID_WORKSPACE_SETTINGS")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let http_timeout_secs = match env::var("HTTP_TIMEOUT_SECS") {
            Ok(v) if !v.trim().is_empty() => Some(
                v.trim()
                    .parse()
                    .with_context(|| format!("HTTP_TIMEOUT_SECS must be an integer, got '{v}'"))?,
            ),
            _ => None,
        };

        Ok(Self {
            api_base_url,
            listen_addr,
            log_level,
            log_format,
            settings_path,
            workspace_settings_path,
            http_timeout_secs,
        })
    }

    /// Resolves the global settings file.
    ///
    /// Priority:
    /// 1. `SID_SETTINGS_PATH` environment variable
    /// 2. `<config dir>/sid-url-manager/settings.json`
    fn load_settings_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("SID_SETTINGS_PATH").filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(path));
        }

        let base = dirs::config_dir()
            .context("No configuration directory found; set SID_SETTINGS_PATH")?;
        Ok(base.join(APP_DIR).join(SETTINGS_FILE))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `api_base_url` is not an absolute `http`/`https` URL
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `http_timeout_secs` is zero
    pub fn validate(&self) -> Result<()> {
        let base = Url::parse(&self.api_base_url).with_context(|| {
            format!(
                "SID_API_BASE_URL must be an absolute URL, got '{}'",
                self.api_base_url
            )
        })?;
        if !matches!(base.scheme(), "http" | "https") {
            anyhow::bail!(
                "SID_API_BASE_URL must use http or https, got '{}'",
                self.api_base_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.http_timeout_secs == Some(0) {
            anyhow::bail!("HTTP_TIMEOUT_SECS must be greater than 0");
        }

        Ok(())
    }

    pub fn http_timeout(&self) -> Option<Duration> {
        self.http_timeout_secs.map(Duration::from_secs)
    }

    /// The credential store described by the settings paths.
    pub fn credential_store(&self) -> JsonFileCredentialStore {
        JsonFileCredentialStore::new(
            self.settings_path.clone(),
            self.workspace_settings_path.clone(),
        )
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  API base URL: {}", self.api_base_url);
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Settings: {}", self.settings_path.display());
        if let Some(ref workspace) = self.workspace_settings_path {
            tracing::info!("  Workspace settings: {}", workspace.display());
        }
        match self.http_timeout_secs {
            Some(secs) => tracing::info!("  HTTP timeout: {}s", secs),
            None => tracing::info!("  HTTP timeout: none"),
        }
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

/// Installs the global `tracing` subscriber for `log_level` and `log_format`.
pub fn init_tracing(log_level: &str, log_format: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
