//! Player party loader.

use std::path::Path;

use anyhow::Context;

use crate::loaders::{LoadResult, read_file};
use crate::template::CombatantTemplate;

/// Loader for the player party from RON files.
///
/// RON format: `Vec<CombatantTemplate>`, in roster order.
pub struct PartyLoader;

impl PartyLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<CombatantTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<Vec<CombatantTemplate>> {
        let members: Vec<CombatantTemplate> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse party RON: {}", e))?;
        if members.is_empty() {
            anyhow::bail!("party file lists no members");
        }
        members
            .into_iter()
            .map(|member| member.validated().map_err(anyhow::Error::from))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_members_in_order() {
        let party = PartyLoader::parse(
            r#"[
                (name: "Terra", hp: 100, mp: 50, strength: 16, magic: 18, speed: 12,
                 spells: ["Fire", "Cure"]),
                (name: "Locke", hp: 90, mp: 10, strength: 18, magic: 6, speed: 15),
            ]"#,
        )
        .unwrap();
        assert_eq!(party.len(), 2);
        assert_eq!(party[0].name, "Terra");
        assert_eq!(party[0].spells, vec!["Fire", "Cure"]);
        assert!(party[1].spells.is_empty());
    }

    #[test]
    fn empty_party_is_rejected() {
        assert!(PartyLoader::parse("[]").is_err());
    }

    #[test]
    fn invalid_member_is_rejected() {
        let err = PartyLoader::parse(
            r#"[(name: "Ghost", hp: 0, mp: 0, strength: 1, magic: 1, speed: 1)]"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("hp must be positive"));
    }
}
