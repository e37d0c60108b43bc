//! Built-in player party.

use crate::template::CombatantTemplate;

/// The single-member party used when no party file is configured.
pub fn default_party() -> Vec<CombatantTemplate> {
    vec![CombatantTemplate {
        name: "Terra".to_owned(),
        description: "A young woman with a mysterious gift for magic.".to_owned(),
        hp: 100,
        mp: 50,
        strength: 16,
        magic: 18,
        speed: 12,
        weakness: None,
        spells: ["Fire", "Blizzard", "Thunder", "Cure"]
            .into_iter()
            .map(str::to_owned)
            .collect(),
    }]
}
