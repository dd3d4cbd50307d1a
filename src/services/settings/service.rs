use crate::models::settings::Settings;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Reads and writes the settings TOML file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/settings.toml` for this application, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "AgriHealth", "AgriCalendar")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and validate the settings file.
    pub fn load(&self) -> Result<Settings> {
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
        let settings: Settings = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse settings in {}", self.path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", self.path.display(), e))?;

        log::info!("Loaded settings from {}", self.path.display());
        Ok(settings)
    }

    /// Like `load`, but a missing file yields the defaults.
    pub fn load_or_default(&self) -> Result<Settings> {
        if !self.path.exists() {
            log::info!(
                "No settings file at {}, using defaults",
                self.path.display()
            );
            return Ok(Settings::default());
        }
        self.load()
    }

    /// Write `settings`, creating parent directories as needed.
    pub fn save(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let contents = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))?;

        log::info!("Saved settings to {}", self.path.display());
        Ok(())
    }
}
