//! Data-driven content definitions and loaders.
//!
//! This crate houses static battle content and the seams for dynamic content:
//! - Combatant templates shared by the player party and enemy rosters
//! - The biome fallback table used whenever enemy generation fails
//! - The [`EnemyProvider`] interface and a generator-backed implementation
//! - Loaders for RON/TOML data files (spells, party, rosters, rules)
//!
//! Content is turned into `battle-core` combatants at battle start and never
//! appears in battle state directly.

pub mod biomes;
pub mod party;
pub mod provider;
pub mod template;

#[cfg(feature = "serde")]
pub mod generated;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use biomes::{BIOMES, FallbackTable};
pub use party::default_party;
pub use provider::{ContentError, EnemyProvider};
pub use template::CombatantTemplate;

#[cfg(feature = "serde")]
pub use generated::{GeneratedEnemyProvider, enemy_prompt, parse_generated_enemy};

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, FileRosterProvider, PartyLoader, RosterLoader, SpellLoader,
};
