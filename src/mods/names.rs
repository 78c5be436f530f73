// Name resolution: one lookup from CLI name to mod across the catalog and client mods

use crate::error::ModError;
use crate::mods::{Catalog, Mod};
use std::collections::BTreeMap;

/// Mod CLI names keyed to their mod definition
pub type ModMap = BTreeMap<String, Mod>;

/// Builds a map of every known mod keyed by CLI name
pub trait ModNameMapper {
    /// Map both server and client mods by CLI name.
    ///
    /// Panics if two mods share a CLI name: that means the catalog or the
    /// user's config is corrupt, not that the user typed something wrong.
    fn map_all_mods(&self, client_mods: &[Mod]) -> ModMap;
}

/// Name mapper backed by the server catalog
pub struct CatalogNameMapper<'a> {
    catalog: &'a Catalog,
}

impl<'a> CatalogNameMapper<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }
}

impl ModNameMapper for CatalogNameMapper<'_> {
    fn map_all_mods(&self, client_mods: &[Mod]) -> ModMap {
        let mut names = ModMap::new();

        for (_, group) in self.catalog.iter() {
            add_cli_names(&group.mods, &mut names);
        }
        add_cli_names(client_mods, &mut names);

        names
    }
}

fn add_cli_names(mods: &[Mod], names: &mut ModMap) {
    for m in mods {
        if names.contains_key(&m.cli_name) {
            panic!("{}", ModError::DuplicateCliName(m.cli_name.clone()));
        }
        names.insert(m.cli_name.clone(), m.clone());
    }
}

/// Check that every name is a server group; the first unknown one is the error
pub fn validate_server_groups(catalog: &Catalog, names: &[String]) -> Result<(), ModError> {
    match names.iter().find(|name| !catalog.contains(name)) {
        Some(name) => Err(ModError::UnknownServerGroup(name.clone())),
        None => Ok(()),
    }
}

/// Check that every name is a known mod; the first unknown one is the error
pub fn validate_mod_cli_names(names: &[String], mods: &ModMap) -> Result<(), ModError> {
    match names.iter().find(|name| !mods.contains_key(name.as_str())) {
        Some(name) => Err(ModError::UnknownMod(name.clone())),
        None => Ok(()),
    }
}
