//! Spell definitions and the catalog they are looked up in.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::error::ConfigurationError;
use crate::state::Combatant;

/// Elemental affinity of a spell, and the tag used for combatant weaknesses.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Element {
    Fire,
    Ice,
    Thunder,
    /// Healing magic. Never deals damage and is never doubled.
    #[strum(to_string = "cure", serialize = "healing")]
    #[cfg_attr(feature = "serde", serde(alias = "healing"))]
    Cure,
    /// Non-elemental damage.
    #[strum(to_string = "none")]
    #[cfg_attr(feature = "serde", serde(rename = "none"))]
    NonElemental,
}

impl Element {
    pub const fn is_healing(self) -> bool {
        matches!(self, Self::Cure)
    }

    /// Elements a combatant can be weak to.
    pub const fn can_be_weakness(self) -> bool {
        matches!(self, Self::Fire | Self::Ice | Self::Thunder)
    }
}

/// Immutable definition of one castable ability.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spell {
    pub name: String,
    pub mp_cost: u32,
    /// Base magnitude before the caster's Magic is added.
    pub power: u32,
    pub element: Element,
}

impl Spell {
    pub fn new(name: impl Into<String>, mp_cost: u32, power: u32, element: Element) -> Self {
        Self {
            name: name.into(),
            mp_cost,
            power,
            element,
        }
    }

    pub fn is_healing(&self) -> bool {
        self.element.is_healing()
    }

    /// True when this spell hits the given weakness for double damage.
    pub fn exploits(&self, weakness: Option<Element>) -> bool {
        self.element.can_be_weakness() && weakness == Some(self.element)
    }
}

static STANDARD: LazyLock<SpellCatalog> = LazyLock::new(|| SpellCatalog {
    spells: vec![
        Spell::new("Fire", 10, 20, Element::Fire),
        Spell::new("Blizzard", 10, 20, Element::Ice),
        Spell::new("Thunder", 10, 20, Element::Thunder),
        Spell::new("Cure", 8, 30, Element::Cure),
    ],
});

/// Name-keyed, ordered collection of spells.
///
/// Lookups ignore ASCII case. A catalog is validated once when built and never
/// changes afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Spell>", into = "Vec<Spell>")
)]
pub struct SpellCatalog {
    spells: Vec<Spell>,
}

impl SpellCatalog {
    /// Builds a catalog, rejecting empty names, duplicates and inert healing spells.
    pub fn new(spells: Vec<Spell>) -> Result<Self, ConfigurationError> {
        let mut seen = HashSet::new();
        for spell in &spells {
            let key = spell.name.trim().to_ascii_lowercase();
            if key.is_empty() {
                return Err(ConfigurationError::EmptySpellName);
            }
            if !seen.insert(key) {
                return Err(ConfigurationError::DuplicateSpell(spell.name.clone()));
            }
            if spell.is_healing() && spell.power == 0 {
                return Err(ConfigurationError::InertHealingSpell(spell.name.clone()));
            }
        }
        Ok(Self { spells })
    }

    /// The built-in catalog: Fire, Blizzard, Thunder and Cure.
    pub fn standard() -> &'static SpellCatalog {
        &STANDARD
    }

    pub fn get(&self, name: &str) -> Option<&Spell> {
        self.spells
            .iter()
            .find(|spell| spell.name.eq_ignore_ascii_case(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Spell> {
        self.spells.iter()
    }

    pub fn len(&self) -> usize {
        self.spells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spells.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.spells.iter().map(|spell| spell.name.as_str())
    }

    /// The combatant's known spells, in the combatant's order. Unknown names are skipped.
    pub fn spells_for<'a>(&'a self, combatant: &'a Combatant) -> impl Iterator<Item = &'a Spell> {
        combatant.spells.iter().filter_map(|name| self.get(name))
    }

    /// True iff the combatant is alive and has enough MP for the spell.
    pub fn can_cast(&self, combatant: &Combatant, spell: &Spell) -> bool {
        combatant.is_alive() && combatant.mp.current >= spell.mp_cost
    }

    /// Known spells the combatant can afford right now.
    pub fn castable_for<'a>(
        &'a self,
        combatant: &'a Combatant,
    ) -> impl Iterator<Item = &'a Spell> {
        self.spells_for(combatant)
            .filter(move |spell| self.can_cast(combatant, spell))
    }
}

impl TryFrom<Vec<Spell>> for SpellCatalog {
    type Error = ConfigurationError;

    fn try_from(spells: Vec<Spell>) -> Result<Self, Self::Error> {
        Self::new(spells)
    }
}

impl From<SpellCatalog> for Vec<Spell> {
    fn from(catalog: SpellCatalog) -> Self {
        catalog.spells
    }
}
