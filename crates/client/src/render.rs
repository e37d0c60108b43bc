//! Plain-text battle display.
use std::io::{self, Write};

use battle_core::{ActionError, BattleSnapshot, CombatantId, CombatantView, Outcome, Resolution, Side};
use battle_runtime::BattleObserver;

const BAR_WIDTH: u32 = 10;

/// Renders snapshots as a status table plus the newest log lines.
pub struct TextRenderer<W> {
    output: W,
    /// Log entries already printed, by action count.
    shown_actions: u64,
}

impl TextRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TextRenderer<W> {
    pub fn new(output: W) -> Self {
        Self {
            output,
            shown_actions: 0,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn status(&mut self, snapshot: &BattleSnapshot) -> io::Result<()> {
        writeln!(self.output)?;
        for side in [Side::Player, Side::Enemy] {
            for view in snapshot.side(side) {
                writeln!(self.output, "{}", status_line(view))?;
            }
        }
        Ok(())
    }

    fn report(&mut self, result: io::Result<()>) {
        if let Err(error) = result {
            tracing::warn!(%error, "failed to write battle output");
        }
    }
}

/// One row of the status table.
pub fn status_line(view: &CombatantView) -> String {
    let weakness = view
        .weakness
        .map(|element| format!("  weak: {element}"))
        .unwrap_or_default();
    let state = if !view.alive {
        "  KO"
    } else if view.is_ready() {
        "  READY"
    } else {
        ""
    };
    format!(
        "{:<16} HP {:>4}/{:<4} {}  MP {:>3}/{:<3}  ATB {}{}{}",
        view.name,
        view.hp,
        view.max_hp,
        bar(view.hp, view.max_hp),
        view.mp,
        view.max_mp,
        bar(view.gauge, view.gauge_max),
        weakness,
        state
    )
}

fn bar(current: u32, maximum: u32) -> String {
    let filled = if maximum == 0 {
        0
    } else {
        (u64::from(current.min(maximum)) * u64::from(BAR_WIDTH) / u64::from(maximum)) as u32
    };
    format!(
        "[{}{}]",
        "#".repeat(filled as usize),
        "-".repeat((BAR_WIDTH - filled) as usize)
    )
}

impl<W: Write> BattleObserver for TextRenderer<W> {
    fn on_start(&mut self, snapshot: &BattleSnapshot) {
        let result = writeln!(self.output, "\n=== Battle start ===")
            .and_then(|()| self.status(snapshot));
        self.report(result);
    }

    fn on_action(&mut self, _resolution: &Resolution, snapshot: &BattleSnapshot) {
        let fresh = snapshot.actions.saturating_sub(self.shown_actions) as usize;
        self.shown_actions = snapshot.actions;
        let skip = snapshot.log_tail.len().saturating_sub(fresh);
        let result = snapshot
            .log_tail
            .iter()
            .skip(skip)
            .try_for_each(|line| writeln!(self.output, ">> {line}"))
            .and_then(|()| self.status(snapshot));
        self.report(result);
    }

    fn on_rejected(&mut self, actor: CombatantId, error: &ActionError) {
        tracing::debug!(actor = %actor, %error, "rejection shown by input provider");
    }

    fn on_finish(&mut self, snapshot: &BattleSnapshot) {
        let banner = match snapshot.outcome {
            Outcome::Victory => "*** Victory! The enemy has been defeated. ***",
            Outcome::Defeat => "*** Defeat... Your party has fallen. ***",
            Outcome::Ongoing => "*** The battle was interrupted. ***",
        };
        let result = writeln!(self.output, "\n{banner}");
        self.report(result);
    }
}

#[cfg(test)]
mod tests {
    use battle_core::{ActionOutcome, Element};

    use super::*;

    fn view(hp: u32, gauge: u32) -> CombatantView {
        CombatantView {
            id: CombatantId(1),
            name: "Sky Serpent".into(),
            side: Side::Enemy,
            hp,
            max_hp: 70,
            mp: 30,
            max_mp: 30,
            gauge,
            gauge_max: 100,
            weakness: Some(Element::Ice),
            alive: hp > 0,
        }
    }

    #[test]
    fn bars_scale_to_width() {
        assert_eq!(bar(0, 100), "[----------]");
        assert_eq!(bar(55, 100), "[#####-----]");
        assert_eq!(bar(100, 100), "[##########]");
        assert_eq!(bar(5, 0), "[----------]");
    }

    #[test]
    fn status_line_marks_ready_and_knocked_out() {
        let ready = status_line(&view(35, 100));
        assert!(ready.starts_with("Sky Serpent"));
        assert!(ready.contains("weak: ice"));
        assert!(ready.ends_with("READY"));
        assert!(status_line(&view(0, 100)).ends_with("KO"));
    }

    #[test]
    fn prints_only_new_log_lines() {
        let mut renderer = TextRenderer::new(Vec::new());
        let resolution = Resolution {
            actor: CombatantId(0),
            outcome: ActionOutcome::Wait,
            battle: Outcome::Ongoing,
            nonce: 0,
        };
        let mut snapshot = BattleSnapshot {
            tick: 10,
            actions: 1,
            outcome: Outcome::Ongoing,
            combatants: vec![view(70, 0)],
            log_tail: vec!["Terra waits.".into()],
        };
        renderer.on_action(&resolution, &snapshot);
        snapshot.actions = 2;
        snapshot.log_tail.push("Sky Serpent waits.".into());
        renderer.on_action(&resolution, &snapshot);

        let shown = String::from_utf8(renderer.into_output()).unwrap();
        assert_eq!(shown.matches(">> Terra waits.").count(), 1);
        assert_eq!(shown.matches(">> Sky Serpent waits.").count(), 1);
    }
}
