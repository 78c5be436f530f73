// Installer module: downloads the selected mods and records each installation

use crate::constants;
use crate::downloader::ModDownloader;
use crate::mods::Mod;
use crate::state::{InstallationState, ModInstallation};
use crate::ui;
use chrono::Utc;
use log::info;

/// Same layout as the Unix `date` command, e.g. `Mon Jan  2 15:04:05 UTC 2006`
const UNIX_DATE_FORMAT: &str = "%a %b %e %H:%M:%S %Z %Y";

/// Where a mod's JAR lives, relative to the install root
pub fn mod_file_path(m: &Mod) -> String {
    format!("{}/{}.jar", constants::MOD_FOLDER_NAME, m.cli_name)
}

/// Download each mod in order, recording it in the state once its file is written.
///
/// Stops at the first failure; mods installed before it stay recorded.
pub async fn install_mods(
    downloader: &dyn ModDownloader,
    mods: &[Mod],
    state: &mut InstallationState,
) -> anyhow::Result<()> {
    if mods.is_empty() {
        ui::success("All mods are up to date");
        return Ok(());
    }

    for m in mods {
        ui::action(&format!("Installing {}", m.friendly_name));
        downloader.download(m, &mod_file_path(m)).await?;

        state.mod_installations.insert(
            m.cli_name.clone(),
            ModInstallation {
                download_url: m.latest_url.clone(),
                timestamp: timestamp_now(),
            },
        );
        info!("Installed {} from {}", m.cli_name, m.latest_url);
    }

    Ok(())
}

fn timestamp_now() -> String {
    Utc::now().format(UNIX_DATE_FORMAT).to_string()
}
