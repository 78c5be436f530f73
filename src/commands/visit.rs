// Visit command for opening a mod's homepage

use crate::browser::Launcher;
use crate::commands::Context;
use crate::error::ModError;
use crate::mods::{CatalogNameMapper, ModNameMapper};
use log::debug;

pub fn visit(ctx: &Context, name: &str, launcher: &dyn Launcher) -> anyhow::Result<()> {
    let state = ctx.load_local_state()?;
    let mods = CatalogNameMapper::new(&ctx.catalog).map_all_mods(&state.client_mods);
    let m = mods
        .get(name)
        .ok_or_else(|| ModError::UnknownMod(name.to_string()))?;

    debug!("Opening {} for {}", m.details_url, m.cli_name);
    launcher.open(&m.details_url)
}
