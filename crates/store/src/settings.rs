//! Editor settings persistence
//!
//! The style configuration the UI holds in memory is saved as JSON so it
//! survives restarts. A missing file yields defaults; a malformed file is an
//! error rather than a silent reset.

use crate::Result;
use doc_model::TextStyle;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Persisted editor state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorSettings {
    /// Current style configuration
    pub style: TextStyle,
    /// Name suggested in the save dialog
    pub default_file_name: String,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            style: TextStyle::default(),
            default_file_name: "document".to_string(),
        }
    }
}

/// Load settings, falling back to defaults when the file does not exist
pub fn load_settings(path: impl AsRef<Path>) -> Result<EditorSettings> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(EditorSettings::default());
    }
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Save settings as pretty-printed JSON
pub fn save_settings(settings: &EditorSettings, path: impl AsRef<Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(settings)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Async variant of [`load_settings`]
pub async fn load_settings_async(path: impl AsRef<Path>) -> Result<EditorSettings> {
    let path = path.as_ref();
    if !tokio::fs::try_exists(path).await.unwrap_or(false) {
        return Ok(EditorSettings::default());
    }
    let json = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&json)?)
}

/// Async variant of [`save_settings`]
pub async fn save_settings_async(
    settings: &EditorSettings,
    path: impl AsRef<Path>,
) -> Result<()> {
    let json = serde_json::to_string_pretty(settings)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}
