use crate::card::DEFAULT_FAVICON_SIZE;
use crate::theme::PREFERENCES_FILE;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// When enabled the application initialises the logger at debug level.
    #[serde(default)]
    pub debug_logging: bool,
    /// Initial window size. If absent, a default size is used.
    #[serde(default = "default_window_size")]
    pub window_size: Option<(i32, i32)>,
    /// JSON file with bookmark groups. When `None` the built-in list is shown.
    #[serde(default)]
    pub bookmarks_file: Option<String>,
    /// Where the theme preference is stored. Defaults to the user's config
    /// directory.
    #[serde(default)]
    pub preferences_file: Option<String>,
    /// Pixel size requested from the favicon service.
    #[serde(default = "default_favicon_size")]
    pub favicon_size: u32,
    #[serde(default = "default_favicon_timeout")]
    pub favicon_timeout_secs: u64,
}

fn default_window_size() -> Option<(i32, i32)> {
    Some((960, 640))
}

fn default_favicon_size() -> u32 {
    DEFAULT_FAVICON_SIZE
}

fn default_favicon_timeout() -> u64 {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_logging: false,
            window_size: default_window_size(),
            bookmarks_file: None,
            preferences_file: None,
            favicon_size: default_favicon_size(),
            favicon_timeout_secs: default_favicon_timeout(),
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn preferences_path(&self) -> PathBuf {
        match &self.preferences_file {
            Some(p) => PathBuf::from(p),
            None => dirs_next::config_dir()
                .map(|dir| dir.join("link_deck").join(PREFERENCES_FILE))
                .unwrap_or_else(|| PathBuf::from(PREFERENCES_FILE)),
        }
    }

    pub fn favicon_timeout(&self) -> Duration {
        Duration::from_secs(self.favicon_timeout_secs)
    }

    pub fn window_size(&self) -> [f32; 2] {
        let (w, h) = self.window_size.unwrap_or((960, 640));
        [w as f32, h as f32]
    }
}
