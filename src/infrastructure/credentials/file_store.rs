//! Credential store backed by JSON settings files.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::domain::ports::{ConfigScope, CredentialKey, CredentialStore, StoreError};

/// Stores credentials in a global settings file and an optional workspace file.
///
/// Reads prefer the workspace file and fall back to the global one. Writes
/// update only the file of the requested scope and keep every other key in it.
#[derive(Debug, Clone)]
pub struct JsonFileCredentialStore {
    global_path: PathBuf,
    workspace_path: Option<PathBuf>,
}

impl JsonFileCredentialStore {
    pub fn new(global_path: impl Into<PathBuf>, workspace_path: Option<PathBuf>) -> Self {
        Self {
            global_path: global_path.into(),
            workspace_path,
        }
    }

    pub fn global_path(&self) -> &Path {
        &self.global_path
    }

    fn path_for(&self, scope: ConfigScope) -> Result<&Path, StoreError> {
        match scope {
            ConfigScope::Global => Ok(&self.global_path),
            ConfigScope::Workspace => self
                .workspace_path
                .as_deref()
                .ok_or(StoreError::ScopeUnavailable(scope)),
        }
    }

    /// Creates the global file (`{}`) if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file or its directory cannot be created.
    pub fn ensure_global_file(&self) -> Result<&Path, StoreError> {
        if !self.global_path.exists() {
            write_settings(&self.global_path, &Map::new())?;
        }
        Ok(&self.global_path)
    }

    fn lookup(path: &Path, key: CredentialKey) -> Option<String> {
        match read_settings(path) {
            Ok(settings) => settings
                .get(key.as_str())
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_owned),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Ignoring unreadable settings file");
                None
            }
        }
    }
}

impl CredentialStore for JsonFileCredentialStore {
    fn get(&self, key: CredentialKey) -> Option<String> {
        self.workspace_path
            .as_deref()
            .and_then(|path| Self::lookup(path, key))
            .or_else(|| Self::lookup(&self.global_path, key))
    }

    fn set(&self, key: CredentialKey, value: &str, scope: ConfigScope) -> Result<(), StoreError> {
        let path = self.path_for(scope)?;
        let mut settings = read_settings(path)?;
        settings.insert(key.as_str().to_string(), Value::String(value.to_string()));
        write_settings(path, &settings)?;
        debug!(key = %key, ?scope, path = %path.display(), "Saved setting");
        Ok(())
    }
}

/// Missing and empty files read as an empty object.
fn read_settings(path: &Path) -> Result<Map<String, Value>, StoreError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
        Err(e) => return Err(e.into()),
    };

    if raw.trim().is_empty() {
        return Ok(Map::new());
    }

    match serde_json::from_str::<Value>(&raw)? {
        Value::Object(map) => Ok(map),
        _ => Ok(Map::new()),
    }
}

fn write_settings(path: &Path, settings: &Map<String, Value>) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json + "\n")?;
    Ok(())
}
