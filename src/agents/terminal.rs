//! Human player at a text terminal.

use std::io::{self, BufRead, Write};

use super::Agent;
use crate::cards::effective_power;
use crate::choice::{Action, Choice, ChoiceView};
use crate::core::{GameState, PlayerId};
use crate::rules::scoring::scores;

/// Prompts for choices on a line-based reader and writer.
///
/// Options are numbered from 1. Unparseable or out-of-range input is
/// answered with a hint and a new prompt; end of input yields an invalid
/// index so the driver gives up.
pub struct TerminalAgent<R, W> {
    input: R,
    output: W,
}

impl TerminalAgent<io::StdinLock<'static>, io::Stdout> {
    /// Agent on the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalAgent<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Hand back the writer (tests inspect what was printed).
    pub fn into_output(self) -> W {
        self.output
    }

    fn show_table(&mut self, state: &GameState, viewer: PlayerId) -> io::Result<()> {
        let [first, second] = scores(state);
        writeln!(self.output, "--- {} to act | scores {first} : {second} ---", state.current_player)?;
        for &people in state.peoples.iter() {
            let card = state.card(people);
            let owner = card.owner.map_or_else(|| "nobody".to_string(), |p| p.to_string());
            let destroyed = if card.destroyed { ", destroyed" } else { "" };
            writeln!(
                self.output,
                "  {} (power {}, {owner}{destroyed}): {}",
                card.name,
                effective_power(state, people),
                card.effect
            )?;
        }
        for player in PlayerId::all() {
            let wonders: Vec<String> = state
                .player(player)
                .wonders
                .iter()
                .map(|&wonder| state.card(wonder).detailed())
                .collect();
            writeln!(
                self.output,
                "  {player}: {} in hand, {} in deck, wonders [{}]",
                state.player(player).hand.len(),
                state.player(player).deck.len(),
                wonders.join("; ")
            )?;
        }
        writeln!(self.output, "  Your hand:")?;
        for &card in state.player(viewer).hand.iter() {
            writeln!(self.output, "    {}", state.card(card).detailed())?;
        }
        Ok(())
    }

    fn ask(&mut self, state: &GameState, choice: &Choice, actions: &[Action]) -> io::Result<usize> {
        self.show_table(state, choice.player)?;
        let view = ChoiceView::new(state, choice, actions);
        writeln!(self.output, "{}: {}", choice.player, view.prompt)?;
        for (number, action) in view.actions.iter().enumerate() {
            writeln!(self.output, "  {}) {}", number + 1, action.label)?;
        }

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(usize::MAX);
            }
            match line.trim().parse::<usize>() {
                Ok(number) if (1..=actions.len()).contains(&number) => return Ok(number - 1),
                _ => writeln!(self.output, "Enter a number from 1 to {}", actions.len())?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Agent for TerminalAgent<R, W> {
    fn message(&mut self, text: &str) {
        if let Err(err) = writeln!(self.output, "{text}") {
            log::warn!("terminal output failed: {err}");
        }
    }

    fn choose_action(&mut self, state: &GameState, choice: &Choice, actions: &[Action]) -> usize {
        self.ask(state, choice, actions).unwrap_or_else(|err| {
            log::warn!("terminal input failed: {err}");
            usize::MAX
        })
    }
}
