// Docs command for opening the tool's documentation

use crate::browser::Launcher;
use crate::constants;
use log::debug;

pub fn docs(launcher: &dyn Launcher) -> anyhow::Result<()> {
    debug!("Opening {}", constants::DOC_URL);
    launcher.open(constants::DOC_URL)
}
