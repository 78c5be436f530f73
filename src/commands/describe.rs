// Describe command for mods, server groups and mod installations

use crate::commands::Context;
use crate::error::ModError;
use crate::mods::{Catalog, CatalogNameMapper, Mod, ModNameMapper};
use crate::state::InstallationState;
use crate::ui;

pub fn describe(ctx: &Context, resource: &str, name: &str) -> anyhow::Result<()> {
    let state = ctx.load_local_state()?;
    let text = describe_text(&ctx.catalog, &state, resource, name)?;
    ui::line(&text);
    Ok(())
}

pub fn describe_text(
    catalog: &Catalog,
    state: &InstallationState,
    resource: &str,
    name: &str,
) -> anyhow::Result<String> {
    match resource {
        "mod" => Ok(describe_mod(&find_mod(catalog, state, name)?)),
        "group" => Ok(describe_group(catalog, name)?),
        "install" | "installation" => {
            let m = find_mod(catalog, state, name)?;
            Ok(describe_install(&m, state))
        }
        other => anyhow::bail!("Unknown resource: {}", other),
    }
}

fn find_mod(catalog: &Catalog, state: &InstallationState, name: &str) -> Result<Mod, ModError> {
    CatalogNameMapper::new(catalog)
        .map_all_mods(&state.client_mods)
        .remove(name)
        .ok_or_else(|| ModError::UnknownMod(name.to_string()))
}

fn describe_mod(m: &Mod) -> String {
    format!(
        "\n{} ({})\n-----\n{}\nWebsite:  {}\nLatest package:  {}",
        m.friendly_name, m.cli_name, m.description, m.details_url, m.latest_url
    )
}

fn describe_group(catalog: &Catalog, name: &str) -> Result<String, ModError> {
    let group = catalog
        .get(name)
        .ok_or_else(|| ModError::UnknownServerGroup(name.to_string()))?;
    Ok(group
        .mods
        .iter()
        .map(|m| m.cli_name.as_str())
        .collect::<Vec<_>>()
        .join("\n"))
}

fn describe_install(m: &Mod, state: &InstallationState) -> String {
    match state.mod_installations.get(&m.cli_name) {
        Some(installation) => format!(
            "\n{} ({})\n-----\nInstall timestamp:  {}\nUp-to-date:  {}",
            m.friendly_name,
            m.cli_name,
            installation.timestamp,
            installation.download_url == m.latest_url
        ),
        None => "Not Installed.".to_string(),
    }
}
