// Install command for downloading new and updated mods

use crate::cli::InstallArgs;
use crate::commands::Context;
use crate::constants;
use crate::downloader::{HttpModDownloader, ModDownloader};
use crate::fs::{self, FileSystem, FtpArgs};
use crate::installer;
use crate::mods::{Catalog, CatalogModFilter, CatalogNameMapper, ModFilter};
use crate::state::StateIo;
use crate::ui;
use log::{debug, info};

/// What the user asked to leave out of this install run
pub struct Selection {
    pub exclude_groups: Vec<String>,
    pub exclude_mods: Vec<String>,
    pub force: bool,
}

pub async fn install(ctx: &mut Context, args: InstallArgs) -> anyhow::Result<()> {
    let ftp_args = ftp_args(ctx, &args)?;
    let selection = selection(&ctx.catalog, &args);

    let fs = fs::open_filesystem(&ctx.settings.install_path(), ftp_args.as_ref())?;
    let downloader = HttpModDownloader::new(fs.as_ref());
    let result = run_install(&ctx.catalog, fs.as_ref(), &downloader, &selection).await;
    fs.close();

    let installed = result?;
    info!("Installed {} mod(s)", installed);
    ui::success("Install completed.");
    Ok(())
}

/// Translate the install flags into exclusion lists.
///
/// Without `--full-server`, `--client-only` excludes every server group and
/// a normal install always leaves out the server-only group.
pub fn selection(catalog: &Catalog, args: &InstallArgs) -> Selection {
    let mut exclude_groups = args.x_group.clone();
    if !args.full_server {
        if args.client_only {
            exclude_groups = catalog.group_names();
        } else {
            exclude_groups.push(constants::SERVER_ONLY_GROUP.to_string());
        }
    }

    Selection {
        exclude_groups,
        exclude_mods: args.x_mod.clone(),
        force: args.force,
    }
}

/// Load the state, install the selected mods and save the state.
///
/// The state is only saved when every download succeeded.
pub async fn run_install(
    catalog: &Catalog,
    fs: &dyn FileSystem,
    downloader: &dyn ModDownloader,
    selection: &Selection,
) -> anyhow::Result<usize> {
    let state_io = StateIo::new(fs);
    let mut state = state_io.load_or_new()?;

    let filter = CatalogModFilter::new(catalog, CatalogNameMapper::new(catalog));
    let mods = filter.filter_all_mods(
        &selection.exclude_groups,
        &selection.exclude_mods,
        &state,
        selection.force,
    )?;
    debug!(
        "Selected mods: {:?}",
        mods.iter().map(|m| m.cli_name.as_str()).collect::<Vec<_>>()
    );

    if let Err(e) = installer::install_mods(downloader, &mods, &mut state).await {
        ui::warning("Install stopped early; the installation record was not updated");
        return Err(e);
    }

    state_io.save(&state)?;
    Ok(mods.len())
}

/// FTP details when a password was given; server and user fall back to the stored settings
fn ftp_args(ctx: &mut Context, args: &InstallArgs) -> anyhow::Result<Option<FtpArgs>> {
    let mut changed = false;
    if let Some(server) = &args.server {
        ctx.settings.ftp_server = server.clone();
        changed = true;
    }
    if let Some(user) = &args.user {
        ctx.settings.ftp_user = user.clone();
        changed = true;
    }
    if changed {
        ctx.save_settings()?;
    }

    Ok(args.password.as_ref().map(|password| FtpArgs {
        server: ctx.settings.ftp_server.clone(),
        user: ctx.settings.ftp_user.clone(),
        password: password.clone(),
        timeout_ms: args.timeout_ms,
    }))
}
