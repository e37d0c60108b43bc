//! Read-only facts consulted while resolving a battle.
//!
//! Unlike [`crate::state::BattleState`], nothing here changes during a battle:
//! the spell catalog and the rule configuration are shared by reference across
//! any number of battles.
pub mod spells;

pub use spells::{Element, Spell, SpellCatalog};

use crate::config::BattleConfig;

/// Bundle of immutable references handed to the engine.
#[derive(Clone, Copy, Debug)]
pub struct BattleEnv<'a> {
    pub spells: &'a SpellCatalog,
    pub config: &'a BattleConfig,
}

impl<'a> BattleEnv<'a> {
    pub fn new(spells: &'a SpellCatalog, config: &'a BattleConfig) -> Self {
        Self { spells, config }
    }
}
