//! Enemies produced by an external text generator.
//!
//! The generator is any closure that turns a prompt into text. Its response is
//! expected to hold a single JSON object, optionally wrapped in a markdown code
//! fence. Anything else is a [`ContentError`] and the caller falls back.

use battle_core::Element;
use serde::Deserialize;

use crate::provider::{ContentError, EnemyProvider};
use crate::template::CombatantTemplate;

/// Prompt sent to the generator for one biome.
pub fn enemy_prompt(biome: &str) -> String {
    format!(
        "Generate a random enemy for a Final Fantasy VI-inspired RPG. \
         The enemy should fit the biome: {biome}.\n\n\
         Please provide the following in JSON format:\n\
         - name: A creative enemy name fitting the biome\n\
         - description: A brief atmospheric description (1-2 sentences)\n\
         - hp: Health points (between 50-100)\n\
         - mp: Magic points (between 10-40)\n\
         - strength: Physical attack power (between 8-20)\n\
         - magic: Magical power (between 8-20)\n\
         - speed: Speed stat for turn order (between 5-15)\n\
         - weakness: Elemental weakness (choose from: fire, ice, thunder)\n\n\
         Return only valid JSON without any markdown formatting or code blocks."
    )
}

/// Wire shape of a generated enemy. Every field is required.
#[derive(Deserialize)]
struct GeneratedEnemy {
    name: String,
    description: String,
    hp: u32,
    mp: u32,
    strength: u32,
    magic: u32,
    speed: u32,
    weakness: String,
}

/// Parses a generator response into a validated template.
pub fn parse_generated_enemy(response: &str) -> Result<CombatantTemplate, ContentError> {
    let body = strip_code_fence(response);
    let raw: GeneratedEnemy =
        serde_json::from_str(body).map_err(|e| ContentError::Malformed(e.to_string()))?;

    let weakness: Element = raw.weakness.trim().parse().map_err(|_| {
        ContentError::Malformed(format!("unknown weakness '{}'", raw.weakness))
    })?;

    CombatantTemplate {
        name: raw.name.trim().to_owned(),
        description: raw.description.trim().to_owned(),
        hp: raw.hp,
        mp: raw.mp,
        strength: raw.strength,
        magic: raw.magic,
        speed: raw.speed,
        weakness: Some(weakness),
        spells: Vec::new(),
    }
    .validated()
}

fn strip_code_fence(text: &str) -> &str {
    let mut body = text.trim();
    if let Some(rest) = body.strip_prefix("```") {
        body = rest.strip_suffix("```").unwrap_or(rest).trim();
        // language tag on the opening fence
        if let Some(rest) = body.strip_prefix("json") {
            body = rest.trim_start();
        }
    }
    body
}

/// [`EnemyProvider`] backed by a prompt-to-text generator.
pub struct GeneratedEnemyProvider<F> {
    generate: F,
}

impl<F> GeneratedEnemyProvider<F>
where
    F: Fn(&str) -> Result<String, ContentError> + Send + Sync,
{
    pub fn new(generate: F) -> Self {
        Self { generate }
    }
}

impl<F> EnemyProvider for GeneratedEnemyProvider<F>
where
    F: Fn(&str) -> Result<String, ContentError> + Send + Sync,
{
    fn roster(&self, biome: &str) -> Result<Vec<CombatantTemplate>, ContentError> {
        let response = (self.generate)(&enemy_prompt(biome))?;
        parse_generated_enemy(&response).map(|enemy| vec![enemy])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOLEM: &str = r#"{
        "name": "Rust Golem",
        "description": "Scrap metal given a grudge.",
        "hp": 85, "mp": 12, "strength": 17, "magic": 9, "speed": 6,
        "weakness": "Thunder"
    }"#;

    #[test]
    fn parses_plain_json() {
        let enemy = parse_generated_enemy(GOLEM).unwrap();
        assert_eq!(enemy.name, "Rust Golem");
        assert_eq!(enemy.hp, 85);
        assert_eq!(enemy.weakness, Some(Element::Thunder));
        assert!(enemy.spells.is_empty());
    }

    #[test]
    fn strips_markdown_fence_and_language_tag() {
        let fenced = format!("```json\n{GOLEM}\n```");
        assert_eq!(
            parse_generated_enemy(&fenced).unwrap(),
            parse_generated_enemy(GOLEM).unwrap()
        );
    }

    #[test]
    fn missing_field_is_malformed() {
        let response = r#"{"name": "Ghost", "hp": 40, "mp": 10, "strength": 8,
                          "magic": 12, "speed": 9, "weakness": "fire"}"#;
        let err = parse_generated_enemy(response).unwrap_err();
        assert!(matches!(err, ContentError::Malformed(msg) if msg.contains("description")));
    }

    #[test]
    fn non_json_is_malformed() {
        assert!(matches!(
            parse_generated_enemy("I'm sorry, I can't do that."),
            Err(ContentError::Malformed(_))
        ));
    }

    #[test]
    fn zero_hp_is_rejected() {
        let response = GOLEM.replace("\"hp\": 85", "\"hp\": 0");
        assert!(matches!(
            parse_generated_enemy(&response),
            Err(ContentError::InvalidTemplate { .. })
        ));
    }

    #[test]
    fn provider_passes_biome_in_prompt() {
        let provider = GeneratedEnemyProvider::new(|prompt: &str| {
            assert!(prompt.contains("Phantom Forest"));
            Ok(GOLEM.to_owned())
        });
        let roster = provider.roster("Phantom Forest").unwrap();
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn generator_failure_propagates() {
        let provider = GeneratedEnemyProvider::new(|_: &str| {
            Err(ContentError::Unavailable("offline".into()))
        });
        assert_eq!(
            provider.roster("World of Ruin"),
            Err(ContentError::Unavailable("offline".into()))
        );
    }
}
