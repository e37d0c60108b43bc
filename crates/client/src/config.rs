//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Configuration read from the process environment (and `.env`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Biome to fight in; the menu is skipped when set.
    pub biome: Option<String>,
    /// Seed for the enemy AI. Unset means a fresh seed every run.
    pub ai_seed: Option<u64>,
    /// Directory holding `config.toml`, `spells.ron`, `party.ron` and `rosters.ron`.
    pub content_dir: Option<PathBuf>,
    /// Shell-free command line of an external enemy generator.
    pub enemy_command: Option<String>,
    pub session_id: Option<String>,
    /// Log lines shown after each action.
    pub log_tail: usize,
    pub max_ticks: u64,
}

impl ClientConfig {
    pub const DEFAULT_LOG_TAIL: usize = 5;
    pub const DEFAULT_MAX_TICKS: u64 = 10_000;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ATB_BIOME` - Biome name (default: ask)
    /// - `ATB_AI_SEED` - Enemy AI seed (default: random)
    /// - `ATB_CONTENT_DIR` - Content data directory (default: built-in content)
    /// - `ATB_ENEMY_COMMAND` - Enemy generator command; prompt on stdin, JSON on stdout
    /// - `ATB_SESSION_ID` - Log session name (default: timestamp)
    /// - `ATB_LOG_TAIL` - Log lines shown per action (default: 5)
    /// - `ATB_MAX_TICKS` - Tick limit for one battle (default: 10000)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        config.biome = read_text(&lookup, "ATB_BIOME");
        config.ai_seed = read_env(&lookup, "ATB_AI_SEED");
        config.content_dir = read_text(&lookup, "ATB_CONTENT_DIR").map(PathBuf::from);
        config.enemy_command = read_text(&lookup, "ATB_ENEMY_COMMAND");
        config.session_id = read_text(&lookup, "ATB_SESSION_ID");
        if let Some(tail) = read_env::<usize>(&lookup, "ATB_LOG_TAIL") {
            config.log_tail = tail;
        }
        if let Some(limit) = read_env::<u64>(&lookup, "ATB_MAX_TICKS") {
            config.max_ticks = limit.max(1);
        }
        config
    }
}

fn read_text(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn read_env<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    read_text(lookup, key)?.parse().ok()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            biome: None,
            ai_seed: None,
            content_dir: None,
            enemy_command: None,
            session_id: None,
            log_tail: Self::DEFAULT_LOG_TAIL,
            max_ticks: Self::DEFAULT_MAX_TICKS,
        }
    }
}
