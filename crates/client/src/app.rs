//! Assembles content, providers and the renderer into one battle.
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::info;

use battle_content::{
    BIOMES, CombatantTemplate, ContentFactory, EnemyProvider, FallbackTable, FileRosterProvider,
    GeneratedEnemyProvider, default_party,
};
use battle_core::{BattleConfig, Outcome, Side, SpellCatalog};
use battle_runtime::{
    AiActionProvider, BattleController, ControllerConfig, ResilientEnemySource, RuntimeError,
};

use crate::config::ClientConfig;
use crate::generator::run_command;
use crate::input::TerminalActionProvider;
use crate::render::TextRenderer;

/// How the session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ending {
    Victory,
    Defeat,
    Quit,
}

impl Ending {
    pub fn code(self) -> u8 {
        match self {
            Self::Victory => 0,
            Self::Defeat => 1,
            Self::Quit => 2,
        }
    }

    pub fn exit_code(self) -> ExitCode {
        ExitCode::from(self.code())
    }
}

/// Rules and rosters for one session.
pub struct Content {
    pub config: BattleConfig,
    pub spells: SpellCatalog,
    pub party: Vec<CombatantTemplate>,
    /// Enemy rosters from disk; the built-in fallback table is used when absent.
    pub rosters: Option<FileRosterProvider>,
}

impl Content {
    pub fn builtin() -> Self {
        Self {
            config: BattleConfig::default(),
            spells: SpellCatalog::standard().clone(),
            party: default_party(),
            rosters: None,
        }
    }

    pub fn load(factory: &ContentFactory) -> Result<Self> {
        Ok(Self {
            config: factory.load_config()?,
            spells: factory.load_spells()?,
            party: factory.load_party()?,
            rosters: Some(factory.load_rosters()?),
        })
    }
}

pub fn load_content(config: &ClientConfig) -> Result<Content> {
    match &config.content_dir {
        Some(dir) => {
            let content = Content::load(&ContentFactory::new(dir))
                .with_context(|| format!("loading content from {}", dir.display()))?;
            info!(dir = %dir.display(), "content loaded");
            Ok(content)
        }
        None => Ok(Content::builtin()),
    }
}

/// Numeric biome menu. `None` when the player quits or input ends.
pub fn choose_biome<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
) -> io::Result<Option<String>> {
    loop {
        writeln!(output, "Choose a biome:")?;
        for (index, biome) in BIOMES.iter().enumerate() {
            writeln!(output, "  {}. {}", index + 1, biome)?;
        }
        write!(output, "Biome (q to quit): ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let choice = line.trim();
        if choice.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        let picked = choice
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| BIOMES.get(index));
        match picked {
            Some(biome) => return Ok(Some((*biome).to_owned())),
            None => writeln!(output, "Invalid choice.")?,
        }
    }
}

/// Enemy roster for `biome`: generator, then roster file, then fallback table.
pub fn enemy_roster(
    config: &ClientConfig,
    content: &Content,
    biome: &str,
) -> Vec<CombatantTemplate> {
    let primary: Box<dyn EnemyProvider + '_> = match (&config.enemy_command, &content.rosters) {
        (Some(command), _) => {
            let command = command.clone();
            Box::new(GeneratedEnemyProvider::new(move |prompt: &str| {
                run_command(&command, prompt)
            }))
        }
        (None, Some(rosters)) => Box::new(rosters),
        (None, None) => Box::new(FallbackTable),
    };
    ResilientEnemySource::new(primary).roster(biome)
}

/// Runs one interactive battle on the terminal.
pub fn run(config: &ClientConfig) -> Result<Ending> {
    let content = load_content(config)?;

    let biome = match &config.biome {
        Some(biome) => biome.clone(),
        None => {
            let choice = choose_biome(io::stdin().lock(), io::stdout())
                .context("reading biome choice")?;
            match choice {
                Some(biome) => biome,
                None => return Ok(Ending::Quit),
            }
        }
    };
    info!(%biome, "biome selected");

    let enemies = enemy_roster(config, &content, &biome);
    println!("\nYou venture into the {biome}...");
    for enemy in &enemies {
        if enemy.description.is_empty() {
            println!("A {} appears!", enemy.name);
        } else {
            println!("A {} appears! {}", enemy.name, enemy.description);
        }
    }

    let ai = match config.ai_seed {
        Some(seed) => AiActionProvider::new(seed),
        None => AiActionProvider::from_entropy(),
    };
    let players = content
        .party
        .iter()
        .map(|member| member.to_combatant(Side::Player, &content.spells))
        .collect();
    let enemies = enemies
        .iter()
        .map(|enemy| enemy.to_combatant(Side::Enemy, &content.spells))
        .collect();

    let mut controller = BattleController::builder()
        .config(
            ControllerConfig::default()
                .with_log_tail(config.log_tail)
                .with_max_ticks(config.max_ticks),
        )
        .battle_config(content.config)
        .spells(content.spells)
        .roster(players, enemies)
        .player_provider(TerminalActionProvider::stdio())
        .enemy_provider(ai)
        .observer(TextRenderer::stdout())
        .build()
        .context("setting up battle")?;

    match controller.run() {
        Ok(Outcome::Victory) => Ok(Ending::Victory),
        Ok(Outcome::Defeat) => Ok(Ending::Defeat),
        Ok(Outcome::Ongoing) => Ok(Ending::Quit),
        Err(RuntimeError::Aborted { actor }) => {
            info!(%actor, "player quit");
            println!("\nYou flee from battle.");
            Ok(Ending::Quit)
        }
        Err(error) => Err(error).context("battle aborted"),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn menu(script: &str) -> (Option<String>, String) {
        let mut shown = Vec::new();
        let choice = choose_biome(Cursor::new(script.to_owned()), &mut shown).unwrap();
        (choice, String::from_utf8(shown).unwrap())
    }

    #[test]
    fn exit_codes_follow_the_ending() {
        assert_eq!(Ending::Victory.code(), 0);
        assert_eq!(Ending::Defeat.code(), 1);
        assert_eq!(Ending::Quit.code(), 2);
    }

    #[test]
    fn biome_menu_lists_every_biome() {
        let (choice, shown) = menu("2\n");
        assert_eq!(choice.as_deref(), Some("Floating Continent"));
        for biome in BIOMES {
            assert!(shown.contains(biome));
        }
    }

    #[test]
    fn biome_menu_reprompts_and_quits() {
        let (choice, shown) = menu("0\n6\nq\n");
        assert_eq!(choice, None);
        assert_eq!(shown.matches("Invalid choice.").count(), 2);
        assert_eq!(menu("").0, None);
    }

    #[test]
    fn builtin_content_uses_fallback_enemies() {
        let config = ClientConfig::default();
        let content = load_content(&config).unwrap();
        assert_eq!(content.party[0].name, "Terra");
        let roster = enemy_roster(&config, &content, "World of Ruin");
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].name, "Doom Gaze");
    }

    #[test]
    fn content_dir_supplies_rosters() {
        let config = ClientConfig {
            content_dir: Some(concat!(env!("CARGO_MANIFEST_DIR"), "/../game/content/data").into()),
            ..ClientConfig::default()
        };
        let content = load_content(&config).unwrap();
        let roster = enemy_roster(&config, &content, "Vector Imperial Base");
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn missing_content_dir_is_an_error() {
        let config = ClientConfig {
            content_dir: Some("/nonexistent/atb-content".into()),
            ..ClientConfig::default()
        };
        assert!(load_content(&config).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn broken_generator_falls_back() {
        let config = ClientConfig {
            enemy_command: Some("echo not-json".into()),
            ..ClientConfig::default()
        };
        let roster = enemy_roster(&config, &Content::builtin(), "Magitek Factory");
        assert_eq!(roster[0].name, "Magitek Armor");
    }
}
