//! Combatant templates: stat blocks read from content before a battle starts.

use battle_core::{Combatant, CombatantStats, Element, Side, SpellCatalog};

use crate::provider::ContentError;

/// Stat block for a party member or enemy.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantTemplate {
    pub name: String,
    /// Flavour text shown when the combatant is introduced.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub hp: u32,
    pub mp: u32,
    pub strength: u32,
    pub magic: u32,
    pub speed: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub weakness: Option<Element>,
    /// Known spells. Empty means every spell in the catalog.
    #[cfg_attr(feature = "serde", serde(default))]
    pub spells: Vec<String>,
}

impl CombatantTemplate {
    /// Checks the stat block and normalizes the weakness tag.
    ///
    /// A `none` weakness becomes no weakness; healing is never a valid weakness.
    pub fn validated(mut self) -> Result<Self, ContentError> {
        if self.name.trim().is_empty() {
            return Err(ContentError::InvalidTemplate {
                name: self.name,
                reason: "name is empty",
            });
        }
        if self.hp == 0 {
            return Err(ContentError::InvalidTemplate {
                name: self.name,
                reason: "hp must be positive",
            });
        }
        if self.speed == 0 {
            return Err(ContentError::InvalidTemplate {
                name: self.name,
                reason: "speed must be positive",
            });
        }
        match self.weakness {
            Some(Element::NonElemental) => self.weakness = None,
            Some(Element::Cure) => {
                return Err(ContentError::InvalidTemplate {
                    name: self.name,
                    reason: "healing cannot be a weakness",
                });
            }
            _ => {}
        }
        Ok(self)
    }

    /// Builds a full-health combatant for the given side.
    pub fn to_combatant(&self, side: Side, catalog: &SpellCatalog) -> Combatant {
        let stats = CombatantStats::new(self.strength, self.magic, self.speed);
        let mut combatant = Combatant::new(self.name.clone(), side, self.hp, self.mp, stats);
        combatant.weakness = self.weakness;
        combatant.spells = if self.spells.is_empty() {
            catalog.names().map(str::to_owned).collect()
        } else {
            self.spells.clone()
        };
        combatant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serpent() -> CombatantTemplate {
        CombatantTemplate {
            name: "Sky Serpent".into(),
            description: String::new(),
            hp: 70,
            mp: 30,
            strength: 12,
            magic: 16,
            speed: 10,
            weakness: Some(Element::Ice),
            spells: vec![],
        }
    }

    #[test]
    fn empty_spell_list_means_whole_catalog() {
        let combatant = serpent().to_combatant(Side::Enemy, SpellCatalog::standard());
        assert_eq!(combatant.spells.len(), 4);
        assert_eq!(combatant.hp.current, 70);
        assert_eq!(combatant.weakness, Some(Element::Ice));
        assert_eq!(combatant.side, Side::Enemy);
    }

    #[test]
    fn zero_speed_is_invalid() {
        let mut template = serpent();
        template.speed = 0;
        assert!(matches!(
            template.validated(),
            Err(ContentError::InvalidTemplate { reason: "speed must be positive", .. })
        ));
    }

    #[test]
    fn none_weakness_is_normalized() {
        let mut template = serpent();
        template.weakness = Some(Element::NonElemental);
        assert_eq!(template.validated().unwrap().weakness, None);
    }
}
