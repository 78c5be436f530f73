// Mods module: mod definitions, the embedded server catalog, name resolution and filtering

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

pub mod filter;
pub mod names;

pub use filter::{CatalogModFilter, ModFilter};
pub use names::{CatalogNameMapper, ModMap, ModNameMapper};

const SERVER_MODS_JSON: &str = include_str!("server_mods.json");

/// Location of the catalog source, relative to the root of the tool's code repo
const SERVER_MODS_REPO_PATH: &str = "src/mods/server_mods.json";

/// A single downloadable JAR file representing a Minecraft mod
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mod {
    pub friendly_name: String,
    pub cli_name: String,
    #[serde(default)]
    pub description: String,
    pub details_url: String,
    pub latest_url: String,
}

/// A logical grouping of mods on the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerGroup {
    pub description: String,
    pub mods: Vec<Mod>,
}

/// Server mod groups keyed by group name.
///
/// Built once at startup and handed by reference to everything that needs it.
/// Iteration is in ascending group name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    groups: BTreeMap<String, ServerGroup>,
}

impl Catalog {
    /// Parse the catalog compiled into the binary
    pub fn embedded() -> anyhow::Result<Self> {
        Self::from_json(SERVER_MODS_JSON).context("server_mods.json couldn't be parsed")
    }

    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    #[cfg(test)]
    pub fn from_groups(groups: BTreeMap<String, ServerGroup>) -> Self {
        Self { groups }
    }

    pub fn get(&self, group_name: &str) -> Option<&ServerGroup> {
        self.groups.get(group_name)
    }

    pub fn get_mut(&mut self, group_name: &str) -> Option<&mut ServerGroup> {
        self.groups.get_mut(group_name)
    }

    pub fn contains(&self, group_name: &str) -> bool {
        self.groups.contains_key(group_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ServerGroup)> {
        self.groups.iter()
    }

    pub fn group_names(&self) -> Vec<String> {
        self.groups.keys().cloned().collect()
    }

    /// Rewrite the catalog source in the working copy of the tool's repo.
    ///
    /// Only used when adding server mods while building a new release.
    pub fn save_to_repo(&self) -> anyhow::Result<()> {
        let cwd = std::env::current_dir().context("failed to read current directory")?;
        self.save_to(&cwd)
    }

    pub fn save_to(&self, repo_root: &Path) -> anyhow::Result<()> {
        let path = repo_root.join(SERVER_MODS_REPO_PATH);
        if !path.exists() {
            anyhow::bail!(
                "adding server mods is only allowed when working from the root of the tool's code repo"
            );
        }

        let bytes = to_tabbed_json(self)?;
        std::fs::write(&path, bytes)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}

/// Serialize as pretty JSON indented with tabs
pub(crate) fn to_tabbed_json<T: Serialize>(value: &T) -> anyhow::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(buf)
}

#[cfg(test)]
pub(crate) mod testdata {
    use super::*;

    pub fn make_mod(cli_name: &str, latest_url: &str) -> Mod {
        Mod {
            friendly_name: format!("{} mod", cli_name),
            cli_name: cli_name.to_string(),
            description: format!("{} description", cli_name),
            details_url: format!("https://mods.example/{}", cli_name),
            latest_url: latest_url.to_string(),
        }
    }

    pub fn group(mods: Vec<Mod>) -> ServerGroup {
        ServerGroup {
            description: "test group".to_string(),
            mods,
        }
    }

    /// Four groups with one mod each, mirroring the shape of the shipped catalog
    pub fn catalog() -> Catalog {
        let mut groups = BTreeMap::new();
        groups.insert(
            "required".to_string(),
            group(vec![make_mod("required1", "https://some_mod_site/download/123")]),
        );
        groups.insert(
            "optional".to_string(),
            group(vec![make_mod("opt1", "https://mod_site/a-mod/a-mod-9.8.7")]),
        );
        groups.insert(
            "performance".to_string(),
            group(vec![make_mod("perf1", "https://some_mod_site/download/547")]),
        );
        groups.insert(
            "server-only".to_string(),
            group(vec![make_mod("svr1", "https://modzone/server-mod/492834")]),
        );
        Catalog::from_groups(groups)
    }

    pub fn client_mods() -> Vec<Mod> {
        vec![
            make_mod("mod1", "https://mod_1_dot_com/latest"),
            make_mod("modtwo", "https://second_mod_dot_gov/latest"),
        ]
    }
}
