//! Built-in biomes and the static enemy table used when generation fails.

use battle_core::Element;

use crate::provider::{ContentError, EnemyProvider};
use crate::template::CombatantTemplate;

/// Biomes offered by the client menu, in display order.
pub const BIOMES: [&str; 5] = [
    "Magitek Factory",
    "Floating Continent",
    "World of Ruin",
    "Vector Imperial Base",
    "Phantom Forest",
];

/// Deterministic enemy table. Never fails: unknown biomes get a Wild Beast.
#[derive(Clone, Copy, Debug, Default)]
pub struct FallbackTable;

impl FallbackTable {
    /// The single fallback enemy for a biome.
    pub fn template(biome: &str) -> CombatantTemplate {
        let (name, description, hp, mp, strength, magic, speed, weakness) =
            match biome.trim().to_ascii_lowercase().as_str() {
                "magitek factory" => (
                    "Magitek Armor",
                    "A mechanical soldier powered by magical energy, its metal frame glows with an eerie blue light.",
                    80,
                    20,
                    15,
                    12,
                    8,
                    Element::Thunder,
                ),
                "floating continent" => (
                    "Sky Serpent",
                    "A winged serpent that rides the wind currents high above the clouds.",
                    70,
                    30,
                    12,
                    16,
                    10,
                    Element::Ice,
                ),
                "world of ruin" => (
                    "Doom Gaze",
                    "A spectral entity that feeds on despair, its form constantly shifting and flickering.",
                    90,
                    35,
                    18,
                    14,
                    7,
                    Element::Fire,
                ),
                _ => (
                    "Wild Beast",
                    "A mysterious creature that lurks in the shadows.",
                    60,
                    15,
                    14,
                    10,
                    9,
                    Element::Fire,
                ),
            };

        CombatantTemplate {
            name: name.to_owned(),
            description: description.to_owned(),
            hp,
            mp,
            strength,
            magic,
            speed,
            weakness: Some(weakness),
            spells: Vec::new(),
        }
    }
}

impl EnemyProvider for FallbackTable {
    fn roster(&self, biome: &str) -> Result<Vec<CombatantTemplate>, ContentError> {
        Ok(vec![Self::template(biome)])
    }
}
