//! Content factory for loading battle content from a data directory.

use std::path::{Path, PathBuf};

use battle_core::{BattleConfig, SpellCatalog};

use crate::loaders::{
    ConfigLoader, FileRosterProvider, LoadResult, PartyLoader, RosterLoader, SpellLoader,
};
use crate::template::CombatantTemplate;

/// Content factory that loads all battle content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── spells.ron
/// ├── party.ron
/// └── rosters.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load battle rules from `config.toml`.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the spell catalog from `spells.ron`.
    pub fn load_spells(&self) -> LoadResult<SpellCatalog> {
        SpellLoader::load(&self.data_dir.join("spells.ron"))
    }

    /// Load the player party from `party.ron`.
    pub fn load_party(&self) -> LoadResult<Vec<CombatantTemplate>> {
        PartyLoader::load(&self.data_dir.join("party.ron"))
    }

    /// Load biome rosters from `rosters.ron`.
    pub fn load_rosters(&self) -> LoadResult<FileRosterProvider> {
        RosterLoader::load(&self.data_dir.join("rosters.ron"))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
