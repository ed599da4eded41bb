//! Settings file handling.
//!
//! Settings live in a TOML file in the platform config directory. A missing
//! file means defaults; a present but invalid file is an error.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::Settings;

const SETTINGS_FILE: &str = "settings.toml";

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service backed by the default settings file location.
    pub fn with_default_path() -> Result<Self> {
        Ok(Self::new(Self::default_path()?))
    }

    /// `<config dir>/settings.toml` for this application.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "SalloniTiti", "BarberBooking")
            .context("Failed to determine config directory")?;
        Ok(dirs.config_dir().join(SETTINGS_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, falling back to defaults when the file does not exist.
    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            log::info!("No settings file at {:?}, using defaults", self.path);
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings file {:?}", self.path))?;
        let settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings file {:?}", self.path))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        Ok(settings)
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create settings directory {:?}", parent))?;
        }

        let content = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write settings file {:?}", self.path))?;

        log::debug!("Saved settings to {:?}", self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let service = SettingsService::new(dir.path().join("settings.toml"));
        assert_eq!(service.load().unwrap(), Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let service = SettingsService::new(dir.path().join("nested").join("settings.toml"));

        let settings = Settings {
            date_format: "DD/MM/YYYY".to_string(),
            reject_past_dates: false,
            ..Default::default()
        };
        service.save(&settings).unwrap();

        assert_eq!(service.load().unwrap(), settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "date_format = \"YYYY/MM/DD\"\n").unwrap();

        let settings = SettingsService::new(&path).load().unwrap();
        assert_eq!(settings.date_format, "YYYY/MM/DD");
        assert_eq!(settings.shop_name, "Salloni Titi");
        assert!(settings.reject_past_dates);
    }

    #[test]
    fn test_invalid_format_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "date_format = \"whenever\"\n").unwrap();

        let err = SettingsService::new(&path).load().unwrap_err();
        assert!(err.to_string().contains("Invalid settings"));
    }

    #[test]
    fn test_save_refuses_invalid_settings() {
        let dir = tempdir().unwrap();
        let service = SettingsService::new(dir.path().join("settings.toml"));
        let settings = Settings {
            shop_name: String::new(),
            ..Default::default()
        };
        assert!(service.save(&settings).is_err());
        assert!(!service.path().exists());
    }
}
