use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Key under which the theme override is persisted.
pub const THEME_KEY: &str = "theme";
pub const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Small persistent key/value store for UI preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences kept as a flat JSON object on disk.
#[derive(Debug)]
pub struct JsonPreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonPreferenceStore {
    /// Open the store at `path`. A missing or unreadable file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(content) if !content.trim().is_empty() => serde_json::from_str(&content)
                .unwrap_or_else(|e| {
                    tracing::warn!("ignoring malformed preferences file {}: {e}", path.display());
                    BTreeMap::new()
                }),
            _ => BTreeMap::new(),
        };
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Tracks the explicit theme override and keeps it in sync with a store.
pub struct ThemeController<S: PreferenceStore> {
    store: S,
    applied: Option<ThemeMode>,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            applied: None,
        }
    }

    /// Apply the persisted override, or clear it when none is stored.
    pub fn apply_saved_theme(&mut self) -> Option<ThemeMode> {
        self.applied = self.store.get(THEME_KEY).as_deref().and_then(ThemeMode::parse);
        tracing::debug!(theme = ?self.applied, "applied saved theme");
        self.applied
    }

    /// Switch to the other theme and persist the choice. Without an explicit
    /// override the new mode is the opposite of the system appearance.
    pub fn toggle(&mut self, system_prefers_dark: bool) -> ThemeMode {
        let next = match self.applied {
            Some(mode) => mode.opposite(),
            None if system_prefers_dark => ThemeMode::Light,
            None => ThemeMode::Dark,
        };
        self.applied = Some(next);
        if let Err(e) = self.store.set(THEME_KEY, next.as_str()) {
            tracing::warn!("failed to persist theme preference: {e}");
        }
        next
    }

    pub fn applied(&self) -> Option<ThemeMode> {
        self.applied
    }

    /// Mode currently in effect given the system appearance.
    pub fn effective(&self, system_prefers_dark: bool) -> ThemeMode {
        self.applied.unwrap_or(if system_prefers_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
