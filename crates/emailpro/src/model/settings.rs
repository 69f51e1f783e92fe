//! Persisted application settings.

use std::path::{Path, PathBuf};

use anyhow::Context;
use emailpro_core::ClientConfig;
use emailpro_core::config::BACKEND_URL_ENV;

use crate::style::widgets::palette::ThemeMode;

/// Application settings that persist across sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AppSettings {
    /// Current theme mode (serialized as string).
    #[serde(with = "theme_mode_serde", default)]
    pub theme_mode: ThemeMode,
    /// Backend base URL; `None` uses the built-in default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend_url: Option<String>,
}

impl AppSettings {
    /// Backend configuration: `EMAILPRO_BACKEND_URL` wins over the saved URL,
    /// which wins over the default.
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        if std::env::var_os(BACKEND_URL_ENV).is_some() {
            return ClientConfig::from_env();
        }
        self.backend_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map_or_else(ClientConfig::default, ClientConfig::new)
    }
}

/// `<config dir>/emailpro/settings.json`.
pub fn settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("emailpro")
        .join("settings.json")
}

/// Reads settings; a missing file yields the defaults.
pub async fn read_settings(path: &Path) -> anyhow::Result<AppSettings> {
    if !tokio::fs::try_exists(path).await.unwrap_or(false) {
        return Ok(AppSettings::default());
    }
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parsing {}", path.display()))
}

/// Writes settings as pretty JSON, creating the parent directory.
pub async fn write_settings(path: &Path, settings: &AppSettings) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("creating {}", dir.display()))?;
    }
    let contents = serde_json::to_string_pretty(settings)?;
    tokio::fs::write(path, contents)
        .await
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Serde helpers for `ThemeMode`, stored as `"light"` / `"dark"`.
mod theme_mode_serde {
    use super::ThemeMode;
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::trivially_copy_pass_by_ref)] // Required by serde with= signature
    pub fn serialize<S>(mode: &ThemeMode, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = match mode {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        };
        serializer.serialize_str(s)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<ThemeMode, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "dark" => Ok(ThemeMode::Dark),
            _ => Ok(ThemeMode::Light),
        }
    }
}
