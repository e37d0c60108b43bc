//! Battle controller: drives the ATB loop for one battle.
//!
//! Each [`BattleController::step`] advances the scheduler by one tick and lets
//! every ready combatant act in tie-break order. Choices come from the
//! [`ActionProvider`] registered for the combatant's side; the engine validates
//! and applies them. Rejected choices are re-requested a bounded number of times
//! before the turn is forfeited.
use tracing::{debug, info, warn};

use battle_core::{
    ActionError, BattleConfig, BattleEngine, BattleEnv, BattleSnapshot, BattleState, Combatant,
    CombatantId, GameError, Outcome, Side, SpellCatalog,
};

use crate::api::{ActionProvider, BattleObserver, NullObserver, Result, RuntimeError};

/// Loop limits for the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Ticks after which [`BattleController::run`] gives up.
    pub max_ticks: u64,
    /// Consecutive rejected choices before a turn is forfeited. At least 1.
    pub max_rejections: u32,
    /// Log entries included in each snapshot handed to the observer.
    pub log_tail: usize,
}

impl ControllerConfig {
    pub const DEFAULT_MAX_TICKS: u64 = 10_000;
    pub const DEFAULT_MAX_REJECTIONS: u32 = 3;
    pub const DEFAULT_LOG_TAIL: usize = 5;

    pub fn with_max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    pub fn with_max_rejections(mut self, max_rejections: u32) -> Self {
        self.max_rejections = max_rejections;
        self
    }

    pub fn with_log_tail(mut self, log_tail: usize) -> Self {
        self.log_tail = log_tail;
        self
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            max_ticks: Self::DEFAULT_MAX_TICKS,
            max_rejections: Self::DEFAULT_MAX_REJECTIONS,
            log_tail: Self::DEFAULT_LOG_TAIL,
        }
    }
}

/// Owns one battle and the collaborators that feed it.
pub struct BattleController {
    state: BattleState,
    spells: SpellCatalog,
    config: BattleConfig,
    settings: ControllerConfig,
    players: Box<dyn ActionProvider>,
    enemies: Box<dyn ActionProvider>,
    observer: Box<dyn BattleObserver>,
}

impl BattleController {
    /// Create a builder for configuring the controller
    pub fn builder() -> BattleControllerBuilder {
        BattleControllerBuilder::new()
    }

    pub fn state(&self) -> &BattleState {
        &self.state
    }

    pub fn into_state(self) -> BattleState {
        self.state
    }

    pub fn spells(&self) -> &SpellCatalog {
        &self.spells
    }

    pub fn snapshot(&self) -> BattleSnapshot {
        BattleSnapshot::capture(&self.state, &self.config, self.settings.log_tail)
    }

    pub fn outcome(&self) -> Outcome {
        self.state.outcome
    }

    /// Runs [`Self::step`] until Victory or Defeat.
    pub fn run(&mut self) -> Result<Outcome> {
        info!(
            target: "runtime::battle",
            combatants = self.state.combatants.len(),
            tick = self.state.tick,
            "battle started"
        );
        self.observer.on_start(&self.snapshot());

        while !self.state.is_over() {
            self.step()?;
        }

        let snapshot = self.snapshot();
        self.observer.on_finish(&snapshot);
        info!(
            target: "runtime::battle",
            outcome = %self.state.outcome,
            ticks = self.state.tick,
            actions = self.state.action_nonce,
            "battle finished"
        );
        Ok(self.state.outcome)
    }

    /// Advances one tick and resolves every turn that became ready.
    ///
    /// Stops as soon as the battle is decided, even mid-tick. Combatants
    /// defeated earlier in the same tick do not act.
    pub fn step(&mut self) -> Result<Outcome> {
        if self.state.is_over() {
            return Ok(self.state.outcome);
        }
        if self.state.tick >= self.settings.max_ticks {
            return Err(RuntimeError::TickLimitExceeded {
                limit: self.settings.max_ticks,
            });
        }

        let ready = BattleEngine::new(&mut self.state, BattleEnv::new(&self.spells, &self.config))
            .tick();

        for actor in ready {
            if self.state.is_over() {
                break;
            }
            if !self.state.combatant(actor).is_some_and(Combatant::is_alive) {
                continue;
            }
            self.take_turn(actor)?;
        }
        Ok(self.state.outcome)
    }

    fn take_turn(&mut self, actor: CombatantId) -> Result<()> {
        let side = self
            .state
            .combatant(actor)
            .map(|combatant| combatant.side)
            .ok_or(ActionError::UnknownActor(actor))?;
        let provider = match side {
            Side::Player => &mut self.players,
            Side::Enemy => &mut self.enemies,
        };
        let limit = self.settings.max_rejections.max(1);
        let mut rejections = 0;

        loop {
            let action = provider
                .provide_action(actor, &self.state, &self.spells)
                .map_err(|error| RuntimeError::from_provider(side, actor, error))?;

            let mut engine =
                BattleEngine::new(&mut self.state, BattleEnv::new(&self.spells, &self.config));
            let resolution = match engine.execute_turn(actor, &action) {
                Ok(resolution) => resolution,
                Err(error) if error.severity().is_recoverable() => {
                    rejections += 1;
                    warn!(
                        target: "runtime::battle",
                        actor = %actor,
                        action = action.label(),
                        code = error.error_code(),
                        %error,
                        rejections,
                        "action rejected"
                    );
                    provider.on_rejected(actor, &error);
                    self.observer.on_rejected(actor, &error);
                    if rejections < limit {
                        continue;
                    }
                    BattleEngine::new(&mut self.state, BattleEnv::new(&self.spells, &self.config))
                        .forfeit(actor)?
                }
                Err(error) => return Err(error.into()),
            };

            debug!(
                target: "runtime::battle",
                actor = %actor,
                nonce = resolution.nonce,
                tick = self.state.tick,
                outcome = ?resolution.outcome,
                "action resolved"
            );
            let snapshot =
                BattleSnapshot::capture(&self.state, &self.config, self.settings.log_tail);
            self.observer.on_action(&resolution, &snapshot);
            return Ok(());
        }
    }
}

/// Builder for [`BattleController`].
pub struct BattleControllerBuilder {
    settings: ControllerConfig,
    config: BattleConfig,
    spells: Option<SpellCatalog>,
    state: Option<BattleState>,
    roster: Option<(Vec<Combatant>, Vec<Combatant>)>,
    players: Option<Box<dyn ActionProvider>>,
    enemies: Option<Box<dyn ActionProvider>>,
    observer: Option<Box<dyn BattleObserver>>,
}

impl BattleControllerBuilder {
    fn new() -> Self {
        Self {
            settings: ControllerConfig::default(),
            config: BattleConfig::default(),
            spells: None,
            state: None,
            roster: None,
            players: None,
            enemies: None,
            observer: None,
        }
    }

    /// Override loop limits
    pub fn config(mut self, settings: ControllerConfig) -> Self {
        self.settings = settings;
        self
    }

    /// Override battle rules
    pub fn battle_config(mut self, config: BattleConfig) -> Self {
        self.config = config;
        self
    }

    /// Spell catalog (defaults to the standard catalog)
    pub fn spells(mut self, spells: SpellCatalog) -> Self {
        self.spells = Some(spells);
        self
    }

    /// Start a fresh battle between two parties
    pub fn roster(mut self, players: Vec<Combatant>, enemies: Vec<Combatant>) -> Self {
        self.roster = Some((players, enemies));
        self
    }

    /// Resume an existing battle, re-validated on build; takes precedence over [`Self::roster`]
    pub fn initial_state(mut self, state: BattleState) -> Self {
        self.state = Some(state);
        self
    }

    /// Set player action provider
    pub fn player_provider(mut self, provider: impl ActionProvider + 'static) -> Self {
        self.players = Some(Box::new(provider));
        self
    }

    /// Set enemy action provider
    pub fn enemy_provider(mut self, provider: impl ActionProvider + 'static) -> Self {
        self.enemies = Some(Box::new(provider));
        self
    }

    /// Set presentation observer (optional)
    pub fn observer(mut self, observer: impl BattleObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Build the controller, validating rules and rosters
    pub fn build(self) -> Result<BattleController> {
        let players = self
            .players
            .ok_or(RuntimeError::ProviderNotSet { side: Side::Player })?;
        let enemies = self
            .enemies
            .ok_or(RuntimeError::ProviderNotSet { side: Side::Enemy })?;
        let spells = self
            .spells
            .unwrap_or_else(|| SpellCatalog::standard().clone());

        self.config.validate()?;
        let state = match (self.state, self.roster) {
            (Some(state), _) => {
                state.validate(&BattleEnv::new(&spells, &self.config))?;
                state
            }
            (None, Some((party, foes))) => {
                BattleState::new(party, foes, &BattleEnv::new(&spells, &self.config))?
            }
            (None, None) => return Err(RuntimeError::MissingRoster),
        };

        Ok(BattleController {
            state,
            spells,
            config: self.config,
            settings: self.settings,
            players,
            enemies,
            observer: self.observer.unwrap_or_else(|| Box::new(NullObserver)),
        })
    }
}
