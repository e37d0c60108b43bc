//! Spell catalog loader.

use std::path::Path;

use anyhow::Context;
use battle_core::{Spell, SpellCatalog};

use crate::loaders::{LoadResult, read_file};

/// Loader for the spell catalog from RON files.
///
/// RON format: `Vec<Spell>`, e.g.
/// `[(name: "Fire", mp_cost: 10, power: 20, element: fire)]`.
pub struct SpellLoader;

impl SpellLoader {
    pub fn load(path: &Path) -> LoadResult<SpellCatalog> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Parses and validates a catalog. Catalog rule violations surface as
    /// [`battle_core::ConfigurationError`] underneath the returned error.
    pub fn parse(content: &str) -> LoadResult<SpellCatalog> {
        let spells: Vec<Spell> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse spell catalog RON: {}", e))?;
        let catalog = SpellCatalog::new(spells).context("invalid spell catalog")?;
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use battle_core::{ConfigurationError, Element};

    use super::*;

    #[test]
    fn parses_catalog() {
        let catalog = SpellLoader::parse(
            r#"[
                (name: "Fire", mp_cost: 10, power: 20, element: fire),
                (name: "Cure", mp_cost: 8, power: 30, element: healing),
            ]"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("cure").map(|s| s.element), Some(Element::Cure));
    }

    #[test]
    fn duplicate_spell_is_a_configuration_error() {
        let err = SpellLoader::parse(
            r#"[
                (name: "Fire", mp_cost: 10, power: 20, element: fire),
                (name: "FIRE", mp_cost: 5, power: 5, element: fire),
            ]"#,
        )
        .unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigurationError>(),
            Some(&ConfigurationError::DuplicateSpell("FIRE".into()))
        );
    }

    #[test]
    fn malformed_ron_is_rejected() {
        assert!(SpellLoader::parse("[(name: \"Fire\", mp_cost: ten)]").is_err());
    }
}
