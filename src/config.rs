// Config module for the user's settings file

use crate::constants;
use anyhow::Context;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// User settings persisted between runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub mc_install_path: String,
    #[serde(default)]
    pub ftp_user: String,
    #[serde(default)]
    pub ftp_server: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mc_install_path: default_install_path()
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_default(),
            ftp_user: String::new(),
            ftp_server: String::new(),
        }
    }
}

impl Settings {
    /// Load the settings, writing defaults first if the file doesn't exist yet
    pub fn load_or_init(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            debug!("No settings at {}; writing defaults", path.display());
            let settings = Self::default();
            settings.save(path)?;
            return Ok(settings);
        }
        Self::load(path)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("{} is not valid settings", path.display()))
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let text = toml::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }

    pub fn install_path(&self) -> PathBuf {
        PathBuf::from(&self.mc_install_path)
    }
}

/// Settings file location: explicit flag, then `MCMODS_CONFIG`, then the home directory
pub fn settings_path(flag: Option<&Path>) -> anyhow::Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path.to_path_buf());
    }
    if let Ok(path) = std::env::var(constants::CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }
    let home = dirs::home_dir().context("could not determine home directory")?;
    Ok(home.join(constants::SETTINGS_FILE))
}

/// Where Minecraft is normally installed on this OS
pub fn default_install_path() -> Option<PathBuf> {
    if cfg!(target_os = "windows") {
        dirs::data_dir().map(|dir| dir.join(".minecraft"))
    } else if cfg!(target_os = "macos") {
        dirs::data_dir().map(|dir| dir.join("minecraft"))
    } else {
        dirs::home_dir().map(|dir| dir.join(".minecraft"))
    }
}
