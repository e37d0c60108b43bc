use std::fmt;

use crate::action::ActionError;
use crate::env::Element;
use crate::error::ConfigurationError;

/// Roster position of a combatant inside one battle.
///
/// Roster order lists the player party first, then the enemy party, each in
/// declaration order. The scheduler uses it as the final tie-breaker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantId(pub usize);

impl fmt::Display for CombatantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which party a combatant fights for.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Enemy,
            Self::Enemy => Self::Player,
        }
    }
}

/// Bounded resource pool (HP or MP). `current` never exceeds `maximum`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    pub current: u32,
    pub maximum: u32,
}

impl ResourceMeter {
    /// Creates a full meter.
    pub const fn full(maximum: u32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    /// Creates a meter with an explicit current value, clamped to the maximum.
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.current == 0
    }

    /// Removes up to `amount`, returning how much was actually removed.
    pub fn drain(&mut self, amount: u32) -> u32 {
        let drained = amount.min(self.current);
        self.current -= drained;
        drained
    }

    /// Adds up to `amount` without exceeding the maximum, returning the gain.
    pub fn restore(&mut self, amount: u32) -> u32 {
        let restored = amount.min(self.maximum.saturating_sub(self.current));
        self.current += restored;
        restored
    }

    /// Fill ratio in whole percent (0 when the maximum is 0).
    pub fn percent(&self) -> u32 {
        if self.maximum == 0 {
            return 0;
        }
        ((self.current as u64 * 100) / self.maximum as u64) as u32
    }
}

/// Base attributes of a combatant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantStats {
    /// Physical attack power.
    pub strength: u32,
    /// Magical attack and healing power.
    pub magic: u32,
    /// Gauge accrual per tick. Must be positive.
    pub speed: u32,
}

impl CombatantStats {
    pub const fn new(strength: u32, magic: u32, speed: u32) -> Self {
        Self {
            strength,
            magic,
            speed,
        }
    }
}

/// A player character or enemy taking part in a battle.
///
/// Player and enemy combatants share this one type; the `side` tag decides
/// which party they belong to and who chooses their actions.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub name: String,
    pub side: Side,
    pub hp: ResourceMeter,
    pub mp: ResourceMeter,
    pub stats: CombatantStats,
    /// ATB gauge, always within `0..=gauge_max`.
    pub gauge: u32,
    /// Element that deals double damage to this combatant.
    pub weakness: Option<Element>,
    /// Names of the spells this combatant may cast, resolved against the catalog.
    pub spells: Vec<String>,
}

impl Combatant {
    /// Creates a combatant at full HP and MP with an empty gauge.
    pub fn new(
        name: impl Into<String>,
        side: Side,
        max_hp: u32,
        max_mp: u32,
        stats: CombatantStats,
    ) -> Self {
        Self {
            name: name.into(),
            side,
            hp: ResourceMeter::full(max_hp),
            mp: ResourceMeter::full(max_mp),
            stats,
            gauge: 0,
            weakness: None,
            spells: Vec::new(),
        }
    }

    pub fn player(name: impl Into<String>, max_hp: u32, max_mp: u32, stats: CombatantStats) -> Self {
        Self::new(name, Side::Player, max_hp, max_mp, stats)
    }

    pub fn enemy(name: impl Into<String>, max_hp: u32, max_mp: u32, stats: CombatantStats) -> Self {
        Self::new(name, Side::Enemy, max_hp, max_mp, stats)
    }

    #[must_use]
    pub fn with_weakness(mut self, weakness: Element) -> Self {
        self.weakness = Some(weakness);
        self
    }

    #[must_use]
    pub fn with_spells<I, S>(mut self, spells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.spells = spells.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_hp(mut self, current: u32) -> Self {
        self.hp = ResourceMeter::new(current, self.hp.maximum);
        self
    }

    #[must_use]
    pub fn with_mp(mut self, current: u32) -> Self {
        self.mp = ResourceMeter::new(current, self.mp.maximum);
        self
    }

    #[must_use]
    pub fn with_gauge(mut self, gauge: u32) -> Self {
        self.gauge = gauge;
        self
    }

    pub fn is_alive(&self) -> bool {
        !self.hp.is_empty()
    }

    pub fn hp_percent(&self) -> u32 {
        self.hp.percent()
    }

    /// Lowers HP by `amount`, stopping at 0. Returns the damage actually taken.
    pub fn apply_damage(&mut self, amount: u32) -> u32 {
        self.hp.drain(amount)
    }

    /// Raises HP by `amount`, stopping at the maximum. Returns the HP restored.
    pub fn apply_heal(&mut self, amount: u32) -> u32 {
        self.hp.restore(amount)
    }

    /// Deducts MP, or fails without touching the pool if the cost is too high.
    pub fn spend_mp(&mut self, amount: u32) -> Result<(), ActionError> {
        if amount > self.mp.current {
            return Err(ActionError::InsufficientMp {
                required: amount,
                available: self.mp.current,
            });
        }
        self.mp.current -= amount;
        Ok(())
    }

    /// Raises MP by `amount`, stopping at the maximum. Returns the MP restored.
    pub fn restore_mp(&mut self, amount: u32) -> u32 {
        self.mp.restore(amount)
    }

    /// Adds `delta` to the gauge, clamped at `gauge_max`.
    pub fn advance_gauge(&mut self, delta: u32, gauge_max: u32) {
        self.gauge = self.gauge.saturating_add(delta).min(gauge_max);
    }

    pub fn is_ready(&self, gauge_max: u32) -> bool {
        self.is_alive() && self.gauge >= gauge_max
    }

    pub fn reset_gauge(&mut self) {
        self.gauge = 0;
    }

    pub fn knows_spell(&self, spell: &str) -> bool {
        self.spells.iter().any(|known| known.eq_ignore_ascii_case(spell))
    }

    /// Checks the static invariants required before a battle starts.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.name.trim().is_empty() {
            return Err(ConfigurationError::EmptyCombatantName);
        }
        if self.hp.maximum == 0 {
            return Err(ConfigurationError::ZeroStat {
                name: self.name.clone(),
                stat: "max HP",
            });
        }
        if self.stats.speed == 0 {
            return Err(ConfigurationError::ZeroStat {
                name: self.name.clone(),
                stat: "speed",
            });
        }
        if self.hp.current > self.hp.maximum {
            return Err(ConfigurationError::ResourceAboveMax {
                name: self.name.clone(),
                stat: "HP",
            });
        }
        if self.mp.current > self.mp.maximum {
            return Err(ConfigurationError::ResourceAboveMax {
                name: self.name.clone(),
                stat: "MP",
            });
        }
        Ok(())
    }
}
