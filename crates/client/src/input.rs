//! Line-based player input.
use std::io::{self, BufRead, Write};

use battle_core::{Action, ActionError, BattleState, CombatantId, Side, Spell, SpellCatalog};
use battle_runtime::{ActionProvider, ProviderError};

/// Action provider that reads menu choices from a line reader.
///
/// Main menu: `1` Attack, `2` Magic, `3` Wait, `q` Quit. Sub-menus accept
/// `0` or `b` to go back. End of input counts as quitting.
pub struct TerminalActionProvider<R, W> {
    input: R,
    output: W,
}

impl TerminalActionProvider<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalActionProvider<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_choice(&mut self, prompt: &str) -> Result<String, ProviderError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ProviderError::Quit);
        }
        Ok(line.trim().to_ascii_lowercase())
    }

    /// Picks one of `options`, skipping the prompt when there is only one.
    /// `None` means the player backed out.
    fn choose_target(
        &mut self,
        title: &str,
        options: &[(CombatantId, String)],
    ) -> Result<Option<CombatantId>, ProviderError> {
        match options {
            [] => return Ok(None),
            [(id, _)] => return Ok(Some(*id)),
            _ => {}
        }
        loop {
            writeln!(self.output, "{title}")?;
            for (index, (_, label)) in options.iter().enumerate() {
                writeln!(self.output, "  {}. {}", index + 1, label)?;
            }
            let choice = self.read_choice("Target (0 to go back): ")?;
            if is_back(&choice) {
                return Ok(None);
            }
            match pick(&choice, options.len()) {
                Some(index) => return Ok(Some(options[index].0)),
                None => writeln!(self.output, "Invalid choice.")?,
            }
        }
    }

    fn choose_spell<'c>(
        &mut self,
        known: &[&'c Spell],
        mp: u32,
    ) -> Result<Option<&'c Spell>, ProviderError> {
        if known.is_empty() {
            writeln!(self.output, "You don't know any spells.")?;
            return Ok(None);
        }
        loop {
            writeln!(self.output, "Spells:")?;
            for (index, spell) in known.iter().enumerate() {
                let note = if spell.mp_cost > mp { "  (not enough MP)" } else { "" };
                writeln!(
                    self.output,
                    "  {}. {} ({} MP, {}){}",
                    index + 1,
                    spell.name,
                    spell.mp_cost,
                    spell.element,
                    note
                )?;
            }
            let choice = self.read_choice("Spell (0 to go back): ")?;
            if is_back(&choice) {
                return Ok(None);
            }
            match pick(&choice, known.len()) {
                Some(index) => return Ok(Some(known[index])),
                None => writeln!(self.output, "Invalid choice.")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> ActionProvider for TerminalActionProvider<R, W> {
    fn provide_action(
        &mut self,
        actor: CombatantId,
        state: &BattleState,
        spells: &SpellCatalog,
    ) -> Result<Action, ProviderError> {
        let Some(me) = state.combatant(actor) else {
            return Ok(Action::wait(actor));
        };
        let targets_on = |side: Side| -> Vec<(CombatantId, String)> {
            state
                .living(side)
                .map(|(id, c)| {
                    let label = format!("{} (HP {}/{})", c.name, c.hp.current, c.hp.maximum);
                    (id, label)
                })
                .collect()
        };
        let foes = targets_on(me.side.opponent());
        let allies = targets_on(me.side);
        let known: Vec<&Spell> = spells.spells_for(me).collect();

        loop {
            writeln!(
                self.output,
                "\n{}'s turn! HP {}/{}  MP {}/{}",
                me.name, me.hp.current, me.hp.maximum, me.mp.current, me.mp.maximum
            )?;
            writeln!(self.output, "  1. Attack  2. Magic  3. Wait  q. Quit")?;

            match self.read_choice("> ")?.as_str() {
                "1" | "a" | "attack" => {
                    if let Some(target) = self.choose_target("Attack whom?", &foes)? {
                        return Ok(Action::attack(actor, target));
                    }
                }
                "2" | "m" | "magic" => {
                    let Some(spell) = self.choose_spell(&known, me.mp.current)? else {
                        continue;
                    };
                    let (title, pool) = if spell.is_healing() {
                        ("Cast on whom?", &allies)
                    } else {
                        ("Cast at whom?", &foes)
                    };
                    if let Some(target) = self.choose_target(title, pool)? {
                        return Ok(Action::magic(actor, spell.name.clone(), target));
                    }
                }
                "3" | "w" | "wait" => return Ok(Action::wait(actor)),
                "q" | "quit" => return Err(ProviderError::Quit),
                _ => writeln!(self.output, "Invalid choice.")?,
            }
        }
    }

    fn on_rejected(&mut self, _actor: CombatantId, error: &ActionError) {
        if writeln!(self.output, "Can't do that: {error}.").is_err() {
            tracing::warn!(%error, "failed to report rejected action");
        }
    }
}

fn is_back(choice: &str) -> bool {
    matches!(choice, "0" | "b" | "back")
}

/// One-based menu index to a zero-based one.
fn pick(choice: &str, len: usize) -> Option<usize> {
    choice
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=len).contains(n))
        .map(|n| n - 1)
}
