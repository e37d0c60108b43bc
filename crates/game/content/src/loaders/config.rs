//! Battle rules loader.

use std::path::Path;

use anyhow::Context;
use battle_core::BattleConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`BattleConfig`] from TOML files.
///
/// Missing keys take their defaults, so an empty file yields the standard rules.
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<BattleConfig> {
        let config: BattleConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use battle_core::ConfigurationError;

    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(ConfigLoader::parse("").unwrap(), BattleConfig::default());
    }

    #[test]
    fn partial_override() {
        let config = ConfigLoader::parse("gauge_rate = 2\nlog_capacity = 8\n").unwrap();
        assert_eq!(config.gauge_rate, 2);
        assert_eq!(config.log_capacity, 8);
        assert_eq!(config.gauge_max, BattleConfig::DEFAULT_GAUGE_MAX);
    }

    #[test]
    fn zero_gauge_max_is_a_configuration_error() {
        let err = ConfigLoader::parse("gauge_max = 0").unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigurationError>(),
            Some(&ConfigurationError::ZeroConfigValue { field: "gauge_max" })
        );
    }
}
