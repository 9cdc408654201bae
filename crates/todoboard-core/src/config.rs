use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DUE_SOON_DAYS: i64 = 2;
pub const DEFAULT_PREVIEW_CHARS: usize = 60;
pub const DEFAULT_SAMPLE_LIST_TITLE: &str = "To Do";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding the board snapshot.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub due_soon_days: Option<i64>,
    #[serde(default)]
    pub preview_chars: Option<usize>,
    /// Title of the list that receives the sample card.
    #[serde(default)]
    pub sample_list_title: Option<String>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/todoboard/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("todoboard/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("todoboard\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Read a config file, falling back to defaults when it is missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Ignoring invalid config {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Could not read config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn effective_data_dir(&self) -> Option<PathBuf> {
        self.data_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|dir| dir.join("todoboard")))
    }

    pub fn effective_due_soon_days(&self) -> i64 {
        self.due_soon_days
            .filter(|days| *days >= 0)
            .unwrap_or(DEFAULT_DUE_SOON_DAYS)
    }

    pub fn effective_preview_chars(&self) -> usize {
        self.preview_chars.unwrap_or(DEFAULT_PREVIEW_CHARS)
    }

    pub fn effective_sample_list_title(&self) -> &str {
        self.sample_list_title
            .as_deref()
            .unwrap_or(DEFAULT_SAMPLE_LIST_TITLE)
    }
}
