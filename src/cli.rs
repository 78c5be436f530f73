// CLI module for handling command-line interface

use crate::constants;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mcmods", version)]
#[command(about = "Tool for maintaining mods allowing connections to EffissoLand")]
#[command(long_about = "This tool installs and updates mods on a machine for connecting to \
EffissoLand. The server is private, and only available by invite.")]
pub struct Cli {
    /// Settings file (default: $MCMODS_CONFIG, then ~/.mcmods.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Show debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Installs and updates mod packages on the local machine
    #[command(long_about = "Installs and updates mods. A plain install with no arguments \
gets all the required and recommended mods.\n\n\
Mods whose latest URL matches the URL recorded at their last download are skipped \
unless --force is given.\n\n\
To perform a server install, use --full-server with the FTP info:\n  \
$ mcmods install --full-server --user <ftp-user> --password <pw> --server <server>\n\
The FTP server and user are stored, so they're only needed on the first command. \
The password is needed every time.")]
    Install(InstallArgs),

    /// Add a new mod to the installer
    Add {
        /// Add the mod to the server catalog (only when building a new version of this tool)
        #[arg(long)]
        server: bool,
    },

    /// List mods and server groups
    #[command(subcommand)]
    List(ListCommands),

    /// Describe mods, mod installations, and server groups
    Describe {
        /// One of: mod, group, install, installation
        resource: String,
        name: String,
    },

    /// Open a browser to the mod's details URL
    Visit { name: String },

    /// Open the documentation homepage for this tool
    Docs,

    /// Get and set the path to the Minecraft install folder
    Mcpath {
        /// Absolute path where Minecraft is installed
        #[arg(long)]
        set: Option<String>,
    },

    /// Print the running version of this tool
    Version,
}

#[derive(Args, Debug, Default)]
pub struct InstallArgs {
    /// Only install your client mods
    #[arg(short, long)]
    pub client_only: bool,

    /// Download and install even if the latest version is already installed
    #[arg(short, long)]
    pub force: bool,

    /// Install all the server mods; only necessary for the server itself
    #[arg(long)]
    pub full_server: bool,

    /// Exclude specific mods (client or server), comma separated
    #[arg(long = "x-mod", value_delimiter = ',')]
    pub x_mod: Vec<String>,

    /// Exclude server mod groups, comma separated; 'server-only' is always excluded
    #[arg(short = 'x', long = "x-group", value_delimiter = ',')]
    pub x_group: Vec<String>,

    /// FTP user name (remembered)
    #[arg(long)]
    pub user: Option<String>,

    /// FTP password; giving it switches the install to FTP
    #[arg(long)]
    pub password: Option<String>,

    /// FTP server address, host[:port] (remembered)
    #[arg(long)]
    pub server: Option<String>,

    /// FTP connection timeout in milliseconds
    #[arg(long, default_value_t = constants::DEFAULT_FTP_TIMEOUT_MS)]
    pub timeout_ms: u64,
}

#[derive(Subcommand)]
pub enum ListCommands {
    /// List mods by CLI name
    Mods(ListModsArgs),

    /// List server groups by name
    Groups,
}

/// Giving both or neither of a flag pair means both
#[derive(Args, Debug, Default)]
pub struct ListModsArgs {
    /// Show only mods that are installed
    #[arg(short, long)]
    pub installed: bool,

    /// Show only mods that are not installed
    #[arg(short, long)]
    pub not_installed: bool,

    /// Show only client mods
    #[arg(short, long)]
    pub client: bool,

    /// Show only server mods
    #[arg(short, long)]
    pub server: bool,

    /// Show only mods from the given server group
    #[arg(short, long)]
    pub group: Option<String>,
}
