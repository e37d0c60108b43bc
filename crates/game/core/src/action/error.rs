use crate::error::{ErrorSeverity, GameError};
use crate::state::{CombatantId, Outcome};

/// Why a target was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum TargetIssue {
    #[strum(to_string = "no such combatant")]
    Missing,
    #[strum(to_string = "target is already down")]
    Defeated,
}

/// Reasons an action can be rejected. A rejected action changes nothing.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("not enough MP: requires {required}, has {available}")]
    InsufficientMp { required: u32, available: u32 },

    #[error("invalid target {target}: {issue}")]
    InvalidTarget {
        target: CombatantId,
        issue: TargetIssue,
    },

    #[error("unknown spell '{0}'")]
    UnknownSpell(String),

    #[error("{actor} does not know spell '{spell}'")]
    SpellNotKnown { actor: CombatantId, spell: String },

    #[error("it is {expected}'s turn, not {got}'s")]
    WrongActor {
        expected: CombatantId,
        got: CombatantId,
    },

    #[error("combatant {0} does not exist")]
    UnknownActor(CombatantId),

    #[error("{actor} cannot act: {reason}")]
    ActorNotReady {
        actor: CombatantId,
        reason: &'static str,
    },

    #[error("battle already ended in {0}")]
    BattleOver(Outcome),
}

impl ActionError {
    pub fn missing_target(target: CombatantId) -> Self {
        Self::InvalidTarget {
            target,
            issue: TargetIssue::Missing,
        }
    }

    pub fn defeated_target(target: CombatantId) -> Self {
        Self::InvalidTarget {
            target,
            issue: TargetIssue::Defeated,
        }
    }
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InsufficientMp { .. } | Self::InvalidTarget { .. } => ErrorSeverity::Recoverable,
            Self::UnknownSpell(_) | Self::SpellNotKnown { .. } | Self::WrongActor { .. } => {
                ErrorSeverity::Validation
            }
            Self::UnknownActor(_) | Self::ActorNotReady { .. } | Self::BattleOver(_) => {
                ErrorSeverity::Internal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientMp { .. } => "ACTION_INSUFFICIENT_MP",
            Self::InvalidTarget { .. } => "ACTION_INVALID_TARGET",
            Self::UnknownSpell(_) => "ACTION_UNKNOWN_SPELL",
            Self::SpellNotKnown { .. } => "ACTION_SPELL_NOT_KNOWN",
            Self::WrongActor { .. } => "ACTION_WRONG_ACTOR",
            Self::UnknownActor(_) => "ACTION_UNKNOWN_ACTOR",
            Self::ActorNotReady { .. } => "ACTION_ACTOR_NOT_READY",
            Self::BattleOver(_) => "ACTION_BATTLE_OVER",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_errors_are_recoverable() {
        let mp = ActionError::InsufficientMp {
            required: 10,
            available: 2,
        };
        assert!(mp.severity().is_recoverable());
        assert_eq!(mp.error_code(), "ACTION_INSUFFICIENT_MP");

        let target = ActionError::defeated_target(CombatantId(1));
        assert!(target.severity().is_recoverable());
        assert_eq!(
            target.to_string(),
            "invalid target #1: target is already down"
        );
    }

    #[test]
    fn protocol_errors_are_internal() {
        let err = ActionError::BattleOver(Outcome::Victory);
        assert!(err.severity().is_internal());
        assert!(!err.severity().is_recoverable());
    }
}
