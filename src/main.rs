mod browser;
mod cli;
mod commands;
mod config;
mod constants;
mod downloader;
mod error;
mod fs;
mod installer;
mod mods;
mod prompt;
mod state;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use commands::Context;
use log::LevelFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(cli).await {
        ui::error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

/// Warnings only unless `--verbose`; `RUST_LOG` still wins
fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    if let Commands::Version = cli.command {
        ui::line(env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let settings_path = config::settings_path(cli.config.as_deref())?;
    let settings = config::Settings::load_or_init(&settings_path)?;
    let mut ctx = Context {
        settings_path,
        settings,
        catalog: mods::Catalog::embedded()?,
    };

    match cli.command {
        Commands::Install(args) => commands::install::install(&mut ctx, args).await,
        Commands::Add { server } => commands::add::add(&mut ctx, server),
        Commands::List(command) => commands::list::list(&ctx, command),
        Commands::Describe { resource, name } => {
            commands::describe::describe(&ctx, &resource, &name)
        }
        Commands::Visit { name } => {
            commands::visit::visit(&ctx, &name, &browser::SystemLauncher)
        }
        Commands::Docs => commands::docs::docs(&browser::SystemLauncher),
        Commands::Mcpath { set } => commands::mcpath::mcpath(&mut ctx, set),
        Commands::Version => Ok(()),
    }
}
