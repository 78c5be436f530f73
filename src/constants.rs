// Constants module for shared string constants

pub const MOD_FOLDER_NAME: &str = "mods";
pub const STATE_FILE: &str = "mcmods-install.json";
pub const SETTINGS_FILE: &str = ".mcmods.toml";
pub const CONFIG_ENV: &str = "MCMODS_CONFIG";

/// Homepage of the online documentation for this tool
pub const DOC_URL: &str = "https://github.com/effisso/mc-mod-installer/tree/main/docs";

/// Group holding mods that belong on the server only; excluded from client installs.
pub const SERVER_ONLY_GROUP: &str = "server-only";

pub const DEFAULT_FTP_TIMEOUT_MS: u64 = 5000;
