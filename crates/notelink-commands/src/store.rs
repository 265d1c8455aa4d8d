//! File-backed settings persistence.
//!
//! Hosts usually persist settings themselves; this store is the fallback for
//! environments without one, keeping the payload in a JSON file under the
//! XDG config directory.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::warn;
use serde_json::Value;

use notelink_core::error::{NotelinkError, Result};
use notelink_core::host::SettingsStore;
use notelink_core::models::Settings;

/// Settings store over a single JSON file.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    /// Creates a store over the given file path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Creates a store at the default location following the XDG Base
    /// Directory specification:
    /// `$XDG_CONFIG_HOME/notelink/settings.json` or
    /// `~/.config/notelink/settings.json`.
    pub fn default_location() -> Result<Self> {
        let path = xdg::BaseDirectories::with_prefix("notelink")
            .place_config_file("settings.json")
            .map_err(|e| NotelinkError::XdgDirectory(e.to_string()))?;
        Ok(Self { path })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SettingsStore for FileSettingsStore {
    async fn load(&self) -> Result<Option<Value>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(&self.path).map_err(|e| NotelinkError::FileSystem {
            path: self.path.clone(),
            source: e,
        })?;

        Ok(Some(serde_json::from_str(&raw)?))
    }

    async fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| NotelinkError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let payload = serde_json::to_string_pretty(settings)?;
        std::fs::write(&self.path, payload).map_err(|e| NotelinkError::FileSystem {
            path: self.path.clone(),
            source: e,
        })
    }
}

/// Loads settings through a store, merging the stored payload over the
/// built-in defaults.
///
/// Load failures fall back to the defaults with a warning; startup never
/// fails over a broken settings file.
pub async fn load_settings(store: &dyn SettingsStore) -> Settings {
    match store.load().await {
        Ok(value) => Settings::merge_value(value),
        Err(err) => {
            warn!("failed to load settings, using defaults: {err}");
            Settings::default()
        }
    }
}
