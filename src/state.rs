// Installation state: what the tool has installed plus the user's own client mods

use crate::constants;
use crate::fs::FileSystem;
use crate::mods::{self, Mod};
use anyhow::Context;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// URL and time of a mod download that was installed on the system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModInstallation {
    pub download_url: String,
    pub timestamp: String,
}

/// Per-user record of installed mods and client-only mod definitions.
///
/// Owned by a single command invocation: loaded once, changed by the
/// installer, saved at the end of a successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallationState {
    #[serde(default)]
    pub mod_installations: BTreeMap<String, ModInstallation>,
    #[serde(default)]
    pub client_mods: Vec<Mod>,
}

impl InstallationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True only if the recorded download URL is the mod's current latest URL
    pub fn is_latest_installed(&self, m: &Mod) -> bool {
        self.mod_installations
            .get(&m.cli_name)
            .is_some_and(|installation| installation.download_url == m.latest_url)
    }

    pub fn is_installed(&self, cli_name: &str) -> bool {
        self.mod_installations.contains_key(cli_name)
    }
}

/// Path of the state file relative to the install root
pub fn state_file_path() -> String {
    format!("{}/{}", constants::MOD_FOLDER_NAME, constants::STATE_FILE)
}

/// Loads and saves the installation state through a `FileSystem`
pub struct StateIo<'a> {
    fs: &'a dyn FileSystem,
}

impl<'a> StateIo<'a> {
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self { fs }
    }

    /// Load the state file, or start an empty state if there isn't one yet
    pub fn load_or_new(&self) -> anyhow::Result<InstallationState> {
        let path = state_file_path();
        match self.fs.read_file(&path)? {
            Some(bytes) => serde_json::from_slice(&bytes)
                .with_context(|| format!("{} is not a valid installation state file", path)),
            None => {
                debug!("No installation state at {}; starting fresh", path);
                Ok(InstallationState::new())
            }
        }
    }

    pub fn save(&self, state: &InstallationState) -> anyhow::Result<()> {
        let bytes = mods::to_tabbed_json(state)?;
        self.fs.write_file(&state_file_path(), &bytes)
    }
}
