//! Two agents sharing one game.

use super::Agent;
use crate::choice::{Action, Choice};
use crate::core::{GameState, PlayerId};

/// Dispatches each choice to the agent of the player who owns it.
///
/// Narration goes to both seats.
pub struct DuelAgent {
    seats: [Box<dyn Agent>; 2],
}

impl DuelAgent {
    pub fn new(first: Box<dyn Agent>, second: Box<dyn Agent>) -> Self {
        Self { seats: [first, second] }
    }

    /// The agent playing `player`.
    pub fn seat(&mut self, player: PlayerId) -> &mut dyn Agent {
        self.seats[player.index()].as_mut()
    }
}

impl Agent for DuelAgent {
    fn message(&mut self, text: &str) {
        for seat in &mut self.seats {
            seat.message(text);
        }
    }

    fn choose_action(&mut self, state: &GameState, choice: &Choice, actions: &[Action]) -> usize {
        self.seat(choice.player).choose_action(state, choice, actions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::RandomAgent;
    use crate::rules::{quick_setup, run_game};

    /// Records which players it was asked about.
    struct Recorder {
        asked: std::rc::Rc<std::cell::RefCell<Vec<PlayerId>>>,
        messages: std::rc::Rc<std::cell::RefCell<usize>>,
    }

    impl Agent for Recorder {
        fn message(&mut self, _text: &str) {
            *self.messages.borrow_mut() += 1;
        }

        fn choose_action(&mut self, _: &GameState, choice: &Choice, actions: &[Action]) -> usize {
            self.asked.borrow_mut().push(choice.player);
            actions.len() - 1
        }
    }

    #[test]
    fn test_routes_by_player() {
        let asked = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let messages = std::rc::Rc::new(std::cell::RefCell::new(0));
        let recorder = Recorder { asked: asked.clone(), messages: messages.clone() };
        let mut duel = DuelAgent::new(Box::new(recorder), Box::new(RandomAgent::new(0)));

        let mut state = quick_setup(2).unwrap();
        run_game(&mut state, &mut duel).unwrap();

        assert!(!asked.borrow().is_empty());
        assert!(asked.borrow().iter().all(|&player| player == PlayerId::ZERO));
        assert!(*messages.borrow() > 0);
    }
}
