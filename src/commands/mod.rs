// Commands module: one submodule per CLI subcommand

use crate::config::Settings;
use crate::fs::LocalFileSystem;
use crate::mods::Catalog;
use crate::state::{InstallationState, StateIo};
use std::path::PathBuf;

pub mod add;
pub mod describe;
pub mod docs;
pub mod install;
pub mod list;
pub mod mcpath;
pub mod visit;

/// What every command gets handed: the user's settings and the server catalog
pub struct Context {
    pub settings_path: PathBuf,
    pub settings: Settings,
    pub catalog: Catalog,
}

impl Context {
    pub fn local_fs(&self) -> LocalFileSystem {
        LocalFileSystem::new(self.settings.install_path())
    }

    /// Installation state from the local install root
    pub fn load_local_state(&self) -> anyhow::Result<InstallationState> {
        StateIo::new(&self.local_fs()).load_or_new()
    }

    pub fn save_settings(&self) -> anyhow::Result<()> {
        self.settings.save(&self.settings_path)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::browser::Launcher;
    use crate::mods::testdata;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Remembers every URL it was asked to open
    #[derive(Default)]
    pub struct RecordingLauncher {
        opened: Mutex<Vec<String>>,
    }

    impl RecordingLauncher {
        pub fn opened(&self) -> Vec<String> {
            self.opened.lock().unwrap().clone()
        }
    }

    impl Launcher for RecordingLauncher {
        fn open(&self, url: &str) -> anyhow::Result<()> {
            self.opened.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    /// A context whose settings and install root live in a temp dir
    pub fn context(temp_dir: &TempDir) -> Context {
        Context {
            settings_path: temp_dir.path().join(".mcmods.toml"),
            settings: Settings {
                mc_install_path: temp_dir.path().join("minecraft").to_string_lossy().into_owned(),
                ftp_user: String::new(),
                ftp_server: String::new(),
            },
            catalog: testdata::catalog(),
        }
    }
}
