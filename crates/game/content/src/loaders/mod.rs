//! Content loaders for reading battle data from files.
//!
//! RON holds spells, the party and enemy rosters; TOML holds the battle rules.
//! Every loader validates what it reads so a battle never starts from bad data.

pub mod config;
pub mod factory;
pub mod party;
pub mod roster;
pub mod spells;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use party::PartyLoader;
pub use roster::{FileRosterProvider, RosterLoader};
pub use spells::SpellLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
