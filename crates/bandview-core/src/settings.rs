use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{BandviewError, Result};

const APP_DIR: &str = "bandview";
const SETTINGS_FILE: &str = "settings.toml";

/// UI color theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub const ALL: &[Theme] = &[Self::Dark, Self::Light];
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dark => write!(f, "Dark"),
            Self::Light => write!(f, "Light"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(format!("unknown theme '{other}' (expected dark or light)")),
        }
    }
}

/// Persisted user settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, rename = "theme_selection")]
    pub theme: Theme,
}

impl Settings {
    /// `<config dir>/bandview/settings.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join(APP_DIR).join(SETTINGS_FILE))
        } else {
            dirs::home_dir().map(|home| home.join(".config").join(APP_DIR).join(SETTINGS_FILE))
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| BandviewError::Settings(e.to_string()))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| BandviewError::Settings(e.to_string()))?;
        std::fs::write(path, content)?;
        info!(path = %path.display(), theme = %self.theme, "Settings saved");
        Ok(())
    }

    /// Settings at `path`, or defaults when the file is missing or unreadable.
    pub fn load_or_default_from(path: &Path) -> Self {
        if !path.exists() {
            debug!("No settings file at {}", path.display());
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Ignoring settings file {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Settings from the default location, or defaults.
    pub fn load_or_default() -> Self {
        Self::default_path()
            .map(|p| Self::load_or_default_from(&p))
            .unwrap_or_default()
    }

    /// Write to the default location.
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path()
            .ok_or_else(|| BandviewError::Settings("no configuration directory".into()))?;
        self.save_to(&path)
    }
}
