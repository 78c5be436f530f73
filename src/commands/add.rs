// Add command for defining a new client or server mod

use crate::commands::Context;
use crate::mods::{CatalogNameMapper, Mod, ModNameMapper};
use crate::prompt::{
    CLI_NAME_PATTERN, CliNameUniquenessValidator, GroupNameValidator, LinePrompt, NoOpValidator,
    RegexValidator, UrlValidator,
};
use crate::state::StateIo;
use crate::ui;
use log::{debug, info};
use std::io::{self, BufRead, Write};

const CLI_NAME_MESSAGE: &str =
    "must be two or more lowercase letters a-z; can include hyphens in between";

pub fn add(ctx: &mut Context, server: bool) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut writer = io::stdout();
    add_with(ctx, server, &mut reader, &mut writer)
}

/// Ask for a mod definition and store it in the client state or the server catalog
pub fn add_with<R: BufRead, W: Write>(
    ctx: &mut Context,
    server: bool,
    reader: &mut R,
    writer: &mut W,
) -> anyhow::Result<()> {
    let state_fs = ctx.local_fs();
    let state_io = StateIo::new(&state_fs);
    let mut state = state_io.load_or_new()?;

    let existing = CatalogNameMapper::new(&ctx.catalog).map_all_mods(&state.client_mods);
    let new_mod = collect_mod(existing, reader, writer)?;

    if server {
        let group_name = LinePrompt::new("Server group\n> ")
            .with_validator(GroupNameValidator::new(&ctx.catalog))
            .get_input(reader, writer)?;
        debug!("Adding {} to server group {}", new_mod.cli_name, group_name);

        let group = ctx
            .catalog
            .get_mut(&group_name)
            .ok_or_else(|| anyhow::anyhow!("Unknown server group: {}", group_name))?;
        group.mods.push(new_mod);
        ctx.catalog.save_to_repo()?;
    } else {
        info!("Adding client mod {}", new_mod.cli_name);
        state.client_mods.push(new_mod);
        state_io.save(&state)?;
    }

    ui::success("Config updated.");
    Ok(())
}

/// Prompt for every field of a new mod; the CLI name must not be in `existing`
pub fn collect_mod<R: BufRead, W: Write>(
    existing: crate::mods::ModMap,
    reader: &mut R,
    writer: &mut W,
) -> anyhow::Result<Mod> {
    let friendly_name = LinePrompt::new("What's the mod's name?\n> ")
        .with_validator(NoOpValidator)
        .get_input(reader, writer)?;

    let cli_name = LinePrompt::new(
        "Globally unique name (lowercase letters and hyphens only; short yet descriptive)\n> ",
    )
    .with_validator(RegexValidator::new(CLI_NAME_PATTERN, CLI_NAME_MESSAGE)?)
    .with_validator(CliNameUniquenessValidator::new(existing))
    .get_input(reader, writer)?;

    let description = LinePrompt::new("Description of the mod (optional)\n> ")
        .get_input(reader, writer)?;

    let details_url = LinePrompt::new("Mod homepage/wiki URL\n> ")
        .with_validator(UrlValidator)
        .get_input(reader, writer)?;

    let latest_url = LinePrompt::new("Desired package download URL\n> ")
        .with_validator(UrlValidator)
        .get_input(reader, writer)?;

    Ok(Mod {
        friendly_name,
        cli_name,
        description,
        details_url,
        latest_url,
    })
}
