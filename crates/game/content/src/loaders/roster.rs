//! Enemy roster loader and the file-backed [`EnemyProvider`].

use std::path::Path;

use anyhow::Context;

use crate::loaders::{LoadResult, read_file};
use crate::provider::{ContentError, EnemyProvider};
use crate::template::CombatantTemplate;

/// Loader for biome rosters from RON files.
///
/// RON format: `Vec<(String, Vec<CombatantTemplate>)>` keyed by biome name.
pub struct RosterLoader;

impl RosterLoader {
    pub fn load(path: &Path) -> LoadResult<FileRosterProvider> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<FileRosterProvider> {
        let raw: Vec<(String, Vec<CombatantTemplate>)> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;

        let mut rosters = Vec::with_capacity(raw.len());
        for (biome, enemies) in raw {
            let enemies = enemies
                .into_iter()
                .map(CombatantTemplate::validated)
                .collect::<Result<Vec<_>, _>>()
                .with_context(|| format!("roster for biome '{}'", biome))?;
            rosters.push((biome, enemies));
        }
        Ok(FileRosterProvider { rosters })
    }
}

/// Enemy rosters read from a data file. Biome lookup ignores ASCII case.
#[derive(Clone, Debug, Default)]
pub struct FileRosterProvider {
    rosters: Vec<(String, Vec<CombatantTemplate>)>,
}

impl FileRosterProvider {
    pub fn biomes(&self) -> impl Iterator<Item = &str> {
        self.rosters.iter().map(|(biome, _)| biome.as_str())
    }
}

impl EnemyProvider for FileRosterProvider {
    fn roster(&self, biome: &str) -> Result<Vec<CombatantTemplate>, ContentError> {
        let (_, enemies) = self
            .rosters
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(biome.trim()))
            .ok_or_else(|| ContentError::UnknownBiome(biome.to_owned()))?;
        if enemies.is_empty() {
            return Err(ContentError::EmptyRoster(biome.to_owned()));
        }
        Ok(enemies.clone())
    }
}
