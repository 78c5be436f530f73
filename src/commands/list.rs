// List command for showing mods and server groups

use crate::cli::{ListCommands, ListModsArgs};
use crate::commands::Context;
use crate::mods::{Catalog, Mod, names};
use crate::state::InstallationState;
use crate::ui;

pub fn list(ctx: &Context, command: ListCommands) -> anyhow::Result<()> {
    let lines = match command {
        ListCommands::Mods(args) => {
            let state = ctx.load_local_state()?;
            select_mods(&ctx.catalog, &state, &args)?
        }
        ListCommands::Groups => ctx.catalog.group_names(),
    };

    for line in lines {
        ui::line(&line);
    }
    Ok(())
}

/// CLI names of the mods matching the list flags: server mods in catalog order, then client mods
pub fn select_mods(
    catalog: &Catalog,
    state: &InstallationState,
    args: &ListModsArgs,
) -> anyhow::Result<Vec<String>> {
    if args.group.is_some() && args.client {
        anyhow::bail!("Can't specify a server group with the client switch");
    }

    let (installed, not_installed) = either_or_both(args.installed, args.not_installed);
    let (client, server) = if args.group.is_some() {
        (false, true)
    } else {
        either_or_both(args.client, args.server)
    };

    let wanted = |m: &Mod| {
        if state.is_installed(&m.cli_name) {
            installed
        } else {
            not_installed
        }
    };

    let mut selected = Vec::new();
    if server {
        if let Some(group) = &args.group {
            names::validate_server_groups(catalog, std::slice::from_ref(group))?;
        }
        for (group_name, group) in catalog.iter() {
            if args.group.as_ref().is_some_and(|g| g != group_name) {
                continue;
            }
            selected.extend(
                group
                    .mods
                    .iter()
                    .filter(|m| wanted(*m))
                    .map(|m| m.cli_name.clone()),
            );
        }
    }
    if client {
        selected.extend(
            state
                .client_mods
                .iter()
                .filter(|m| wanted(*m))
                .map(|m| m.cli_name.clone()),
        );
    }

    Ok(selected)
}

/// A flag pair where giving neither means the same as giving both
fn either_or_both(a: bool, b: bool) -> (bool, bool) {
    if a == b { (true, true) } else { (a, b) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModError;
    use crate::mods::testdata;
    use crate::state::ModInstallation;

    fn state() -> InstallationState {
        let mut state = InstallationState::new();
        state.client_mods = testdata::client_mods();
        for name in ["perf1", "modtwo"] {
            state.mod_installations.insert(
                name.to_string(),
                ModInstallation {
                    download_url: "https://old.example/file.jar".to_string(),
                    timestamp: "Mon Jan  2 15:04:05 UTC 2006".to_string(),
                },
            );
        }
        state
    }

    fn run(args: ListModsArgs) -> anyhow::Result<Vec<String>> {
        select_mods(&testdata::catalog(), &state(), &args)
    }

    #[test]
    fn test_no_flags_lists_everything() {
        let mods = run(ListModsArgs::default()).unwrap();
        assert_eq!(
            mods,
            vec!["opt1", "perf1", "required1", "svr1", "mod1", "modtwo"]
        );
    }

    #[test]
    fn test_installed_filter_ignores_url_freshness() {
        let mods = run(ListModsArgs {
            installed: true,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(mods, vec!["perf1", "modtwo"]);
    }

    #[test]
    fn test_not_installed_client_mods() {
        let mods = run(ListModsArgs {
            not_installed: true,
            client: true,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(mods, vec!["mod1"]);
    }

    #[test]
    fn test_both_flags_mean_both() {
        let mods = run(ListModsArgs {
            installed: true,
            not_installed: true,
            client: true,
            server: true,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(mods.len(), 6);
    }

    #[test]
    fn test_group_limits_to_server_group() {
        let mods = run(ListModsArgs {
            group: Some("performance".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(mods, vec!["perf1"]);
    }

    #[test]
    fn test_group_with_client_is_an_error() {
        let err = run(ListModsArgs {
            group: Some("performance".to_string()),
            client: true,
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Can't specify a server group with the client switch"
        );
    }

    #[test]
    fn test_unknown_group() {
        let err = run(ListModsArgs {
            group: Some("nope".to_string()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(
            err.downcast_ref::<ModError>(),
            Some(&ModError::UnknownServerGroup("nope".to_string()))
        );
    }
}
