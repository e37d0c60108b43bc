use crate::error::ConfigurationError;

/// Battle rule constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Gauge value at which a combatant becomes ready to act.
    pub gauge_max: u32,

    /// Gauge gained per tick for each point of Speed.
    ///
    /// Every combatant uses the same rate, so accrual stays monotonic in Speed.
    pub gauge_rate: u32,

    /// Maximum number of entries retained by the battle log.
    pub log_capacity: usize,

    /// Flat reduction applied to physical attacks. Damage never drops below 1.
    pub attack_mitigation: u32,
}

impl BattleConfig {
    pub const DEFAULT_GAUGE_MAX: u32 = 100;
    pub const DEFAULT_GAUGE_RATE: u32 = 1;
    pub const DEFAULT_LOG_CAPACITY: usize = 32;
    pub const DEFAULT_ATTACK_MITIGATION: u32 = 0;

    pub fn new() -> Self {
        Self {
            gauge_max: Self::DEFAULT_GAUGE_MAX,
            gauge_rate: Self::DEFAULT_GAUGE_RATE,
            log_capacity: Self::DEFAULT_LOG_CAPACITY,
            attack_mitigation: Self::DEFAULT_ATTACK_MITIGATION,
        }
    }

    pub fn with_log_capacity(mut self, log_capacity: usize) -> Self {
        self.log_capacity = log_capacity;
        self
    }

    pub fn with_gauge_rate(mut self, gauge_rate: u32) -> Self {
        self.gauge_rate = gauge_rate;
        self
    }

    pub fn with_attack_mitigation(mut self, attack_mitigation: u32) -> Self {
        self.attack_mitigation = attack_mitigation;
        self
    }

    /// Rejects values that would stall the scheduler or disable the log.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.gauge_max == 0 {
            return Err(ConfigurationError::ZeroConfigValue { field: "gauge_max" });
        }
        if self.gauge_rate == 0 {
            return Err(ConfigurationError::ZeroConfigValue { field: "gauge_rate" });
        }
        if self.log_capacity == 0 {
            return Err(ConfigurationError::ZeroConfigValue {
                field: "log_capacity",
            });
        }
        Ok(())
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
