use crate::app::keymap::KeyConfig;
use crate::theme::PaletteType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// On-disk configuration. Credentials never appear here; the cookie string
/// is an opaque session artifact the user copies from their browser.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookies: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<PaletteType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keys: Option<KeyConfig>,
}

/// A resolved server session: base URL plus the raw cookie string.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub server_url: String,
    pub cookies: String,
}

impl AppConfig {
    /// Resolve the session, environment variables taking precedence over
    /// the config file.
    #[must_use]
    pub fn session(&self) -> Option<Session> {
        self.session_with_overrides(
            std::env::var("COFFRE_SERVER_URL").ok(),
            std::env::var("COFFRE_COOKIES").ok(),
        )
    }

    #[must_use]
    pub fn session_with_overrides(
        &self,
        server_url: Option<String>,
        cookies: Option<String>,
    ) -> Option<Session> {
        let server_url = server_url.or_else(|| self.server_url.clone())?;
        let cookies = cookies.or_else(|| self.cookies.clone())?;
        if server_url.trim().is_empty() {
            return None;
        }
        Some(Session {
            server_url,
            cookies,
        })
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("coffre");
        path.push("config.toml");
        path
    })
}

pub fn load() -> AppConfig {
    get_config_path()
        .map(|path| load_from(&path))
        .unwrap_or_default()
}

pub fn load_from(path: &Path) -> AppConfig {
    if path.exists() {
        if let Ok(content) = std::fs::read_to_string(path) {
            if let Ok(config) = toml::from_str::<AppConfig>(&content) {
                return config;
            }
        }
    }
    AppConfig::default()
}

/// Remember the chosen theme across sessions. Best-effort: a read-only
/// config directory silently keeps the old value.
pub fn save_theme(palette: PaletteType) {
    if let Some(path) = get_config_path() {
        let mut config = load_from(&path);
        config.theme = Some(palette);
        save_to(&path, &config);
    }
}

pub fn save_to(path: &Path, config: &AppConfig) {
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    if let Ok(content) = toml::to_string(config) {
        let _ = std::fs::write(path, content);
    }
}
