//! Agent answered from another thread.
//!
//! The engine thread owns a [`ChannelAgent`]; a front end (GUI loop, network
//! session) owns the matching [`ChannelHandle`]. Each decision is published
//! as a [`ChoiceView`] and the engine blocks until an index comes back.

use std::sync::mpsc::{self, Receiver, Sender};

use super::Agent;
use crate::choice::{Action, Choice, ChoiceView};
use crate::core::GameState;

/// What the engine side publishes.
#[derive(Clone, Debug)]
pub enum Prompt {
    Message(String),
    Choice(ChoiceView),
}

/// Engine side of the hand-off.
pub struct ChannelAgent {
    prompts: Sender<Prompt>,
    answers: Receiver<usize>,
}

/// Front-end side of the hand-off.
pub struct ChannelHandle {
    pub prompts: Receiver<Prompt>,
    pub answers: Sender<usize>,
}

impl ChannelAgent {
    /// Create a connected agent and handle.
    #[must_use]
    pub fn pair() -> (Self, ChannelHandle) {
        let (prompt_tx, prompt_rx) = mpsc::channel();
        let (answer_tx, answer_rx) = mpsc::channel();
        (
            Self { prompts: prompt_tx, answers: answer_rx },
            ChannelHandle { prompts: prompt_rx, answers: answer_tx },
        )
    }
}

impl Agent for ChannelAgent {
    fn message(&mut self, text: &str) {
        if self.prompts.send(Prompt::Message(text.to_string())).is_err() {
            log::debug!("front end gone, dropping message: {text}");
        }
    }

    /// Blocks until the front end answers. A disconnected front end yields
    /// an invalid index.
    fn choose_action(&mut self, state: &GameState, choice: &Choice, actions: &[Action]) -> usize {
        let view = ChoiceView::new(state, choice, actions);
        if self.prompts.send(Prompt::Choice(view)).is_err() {
            return usize::MAX;
        }
        self.answers.recv().unwrap_or(usize::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GodsError;
    use crate::rules::{play_out, quick_setup};

    #[test]
    fn test_answers_from_other_thread() {
        let (mut agent, handle) = ChannelAgent::pair();
        let front_end = std::thread::spawn(move || {
            let mut choices = 0;
            while let Ok(prompt) = handle.prompts.recv() {
                if let Prompt::Choice(view) = prompt {
                    choices += 1;
                    // Always take the last option: "Declare the end" on main choices.
                    if handle.answers.send(view.actions.len() - 1).is_err() {
                        break;
                    }
                }
            }
            choices
        });

        let mut state = quick_setup(6).unwrap();
        play_out(&mut state, &mut agent).unwrap();
        drop(agent);

        assert!(state.game_over);
        assert!(front_end.join().unwrap() >= 2);
    }

    #[test]
    fn test_disconnected_front_end_fails_game() {
        let (mut agent, handle) = ChannelAgent::pair();
        drop(handle);

        let mut state = quick_setup(6).unwrap();
        let result = play_out(&mut state, &mut agent);

        assert!(matches!(result, Err(GodsError::InvalidSelection { .. })));
    }
}
