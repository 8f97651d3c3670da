use std::{fs, path::Path, path::PathBuf};

use pixel_engine_edit::{DEFAULT_COLOR, DEFAULT_SIDE_LENGTH};
use serde::{Deserialize, Serialize};

const SETTINGS_FILE: &str = "settings.toml";

/// Persistent defaults, stored as TOML in the config directory
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Grid side length when `--size` is not given
    pub default_size: usize,

    /// Active color at startup
    pub default_color: String,

    /// Pixels per cell for PNG export when the command does not say
    pub export_pixel_size: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_size: DEFAULT_SIDE_LENGTH,
            default_color: DEFAULT_COLOR.to_string(),
            export_pixel_size: 2,
        }
    }
}

impl Settings {
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "GitHub", "pixel_draw").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Load settings from `path`, or from the config directory when `path` is `None`.
    ///
    /// A missing settings file in the config directory is not an error.
    ///
    /// # Errors
    ///
    /// This function will return an error if an explicitly given file is
    /// missing, or if a settings file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = path {
            return Self::load_file(path);
        }
        if let Some(dir) = Self::config_dir() {
            let file = dir.join(SETTINGS_FILE);
            if file.exists() {
                return Self::load_file(&file);
            }
        }
        Ok(Self::default())
    }

    fn load_file(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read settings {}: {e}", path.display()))?;
        Self::from_toml(&content).map_err(|e| anyhow::anyhow!("Failed to parse settings {}: {e}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Write these settings to the config directory.
    ///
    /// # Errors
    ///
    /// This function will return an error if the directory or file cannot be written.
    pub fn store(&self) -> anyhow::Result<()> {
        let Some(dir) = Self::config_dir() else {
            return Ok(());
        };
        fs::create_dir_all(&dir)?;

        let file_name = dir.join(SETTINGS_FILE);
        let mut write_name = file_name.clone();
        write_name.set_extension("new");

        fs::write(&write_name, toml::to_string_pretty(self)?)?;
        fs::rename(&write_name, &file_name)?;
        Ok(())
    }
}
