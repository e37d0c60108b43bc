//! Damage and healing formulas.
//!
//! Pure functions used by the action resolver. All arithmetic is integer and
//! saturating, so the same inputs always give the same numbers.
//!
//! # Formulas
//!
//! ```text
//! physical = max(1, strength - mitigation)
//! spell    = max(1, power + magic), x2 if the target is weak to the element
//! heal     = power + magic
//! ```

use crate::env::{Element, Spell};

/// Minimum damage of any offensive action against a living target.
pub const MIN_DAMAGE: u32 = 1;

/// Multiplier applied when a spell hits the target's weakness.
pub const WEAKNESS_MULTIPLIER: u32 = 2;

/// Damage dealt by a physical attack.
pub fn physical_damage(strength: u32, mitigation: u32) -> u32 {
    strength.saturating_sub(mitigation).max(MIN_DAMAGE)
}

/// Damage dealt by an offensive spell, and whether the weakness bonus applied.
///
/// The weakness multiplier is applied after the base computation and before the
/// result is clamped against the target's HP. The doubling is exact while the
/// base stays at or below `u32::MAX / 2`; above that the result saturates at
/// `u32::MAX`, which still exceeds any target's HP.
pub fn spell_damage(spell: &Spell, caster_magic: u32, weakness: Option<Element>) -> (u32, bool) {
    let base = spell.power.saturating_add(caster_magic).max(MIN_DAMAGE);
    if spell.exploits(weakness) {
        (base.saturating_mul(WEAKNESS_MULTIPLIER), true)
    } else {
        (base, false)
    }
}

/// HP restored by a healing spell before clamping to the target's maximum.
pub fn heal_amount(spell: &Spell, caster_magic: u32) -> u32 {
    spell.power.saturating_add(caster_magic)
}
