// Mod filtering: decides which mods an install run should fetch

use crate::error::ModError;
use crate::mods::names::{self, ModNameMapper};
use crate::mods::{Catalog, Mod};
use crate::state::InstallationState;
use std::collections::HashSet;

/// Narrows the full set of mods down to those the user wants installed
pub trait ModFilter {
    /// Select the mods to fetch.
    ///
    /// Group names are validated before mod names, and the first unknown
    /// name of either kind is returned with no mods. Catalog mods come first
    /// in catalog order, followed by client mods in list order. A mod already
    /// at its latest URL is skipped unless `force` is set.
    fn filter_all_mods(
        &self,
        exclude_groups: &[String],
        exclude_mods: &[String],
        state: &InstallationState,
        force: bool,
    ) -> Result<Vec<Mod>, ModError>;
}

pub struct CatalogModFilter<'a, M: ModNameMapper> {
    catalog: &'a Catalog,
    mapper: M,
}

impl<'a, M: ModNameMapper> CatalogModFilter<'a, M> {
    pub fn new(catalog: &'a Catalog, mapper: M) -> Self {
        Self { catalog, mapper }
    }
}

impl<M: ModNameMapper> ModFilter for CatalogModFilter<'_, M> {
    fn filter_all_mods(
        &self,
        exclude_groups: &[String],
        exclude_mods: &[String],
        state: &InstallationState,
        force: bool,
    ) -> Result<Vec<Mod>, ModError> {
        names::validate_server_groups(self.catalog, exclude_groups)?;

        let mod_map = self.mapper.map_all_mods(&state.client_mods);
        names::validate_mod_cli_names(exclude_mods, &mod_map)?;

        let group_set: HashSet<&str> = exclude_groups.iter().map(String::as_str).collect();
        let mod_set: HashSet<&str> = exclude_mods.iter().map(String::as_str).collect();
        let wanted = |m: &Mod| {
            !mod_set.contains(m.cli_name.as_str()) && (force || !state.is_latest_installed(m))
        };

        let server_mods = self
            .catalog
            .iter()
            .filter(|(group_name, _)| !group_set.contains(group_name.as_str()))
            .flat_map(|(_, group)| group.mods.iter());

        Ok(server_mods
            .chain(state.client_mods.iter())
            .filter(|m| wanted(*m))
            .cloned()
            .collect())
    }
}
