//! Turn engine integration tests on full dealt games.

use gods_engine::agents::{Agent, RandomAgent};
use gods_engine::cards::catalog::parse_records;
use gods_engine::cards::{BuiltinCatalog, CardIndex, CardSource, JsonCardFile};
use gods_engine::choice::{Action, Choice, ChoiceKind};
use gods_engine::core::{GameState, Phase, PlayerId};
use gods_engine::rules::{
    apply_choice, final_result, get_next_choice, play_out, quick_setup, run_game, scores,
    GameSetup,
};
use gods_engine::{snapshot, GodsError};

/// Plays randomly and counts how often it was asked.
struct Counting {
    inner: RandomAgent,
    asked: usize,
    forced: usize,
    messages: Vec<String>,
}

impl Counting {
    fn new(seed: u64) -> Self {
        Self {
            inner: RandomAgent::new(seed),
            asked: 0,
            forced: 0,
            messages: Vec::new(),
        }
    }
}

impl Agent for Counting {
    fn message(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }

    fn choose_action(&mut self, state: &GameState, choice: &Choice, actions: &[Action]) -> usize {
        self.asked += 1;
        if actions.len() < 2 {
            self.forced += 1;
        }
        self.inner.choose_action(state, choice, actions)
    }
}

/// Always answers with an index nobody offers.
struct OutOfRange;

impl Agent for OutOfRange {
    fn choose_action(&mut self, _state: &GameState, _choice: &Choice, _actions: &[Action]) -> usize {
        99
    }
}

// =============================================================================
// Setup
// =============================================================================

#[test]
fn test_quick_setup_deal() {
    let state = quick_setup(1).unwrap();

    for player in PlayerId::all() {
        assert_eq!(state.player(player).hand.len(), 5);
        assert_eq!(state.player(player).deck.len(), 5);
        assert!(state.player(player).wonders.is_empty());
    }
    assert_eq!(state.peoples.len(), 3);
    assert_eq!(state.shared_deck.len(), 32 - 20);
    assert_eq!(state.current_player, PlayerId::ZERO);
    assert_eq!(state.phase, Phase::Start);
    state.check_zones().unwrap();
}

#[test]
fn test_setup_rejects_small_catalog() {
    let setup = GameSetup::default().with_deck_size(20);
    let err = setup.build(&BuiltinCatalog, 1).unwrap_err();
    assert!(matches!(err, GodsError::NotEnoughCards { kind: "playable", .. }));
}

#[test]
fn test_json_card_file_matches_builtin() {
    let records = BuiltinCatalog.load().unwrap();
    let path = std::env::temp_dir().join(format!("gods-cards-{}.json", std::process::id()));
    std::fs::write(&path, serde_json::to_string(&records).unwrap()).unwrap();

    let from_file = GameSetup::default().build(&JsonCardFile::new(&path), 3).unwrap();
    let builtin = quick_setup(3).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(
        snapshot::encode(&from_file).unwrap(),
        snapshot::encode(&builtin).unwrap()
    );
}

#[test]
fn test_bad_card_file() {
    assert!(matches!(parse_records("[{\"name\": 3}]"), Err(GodsError::CardData(_))));

    let missing = JsonCardFile::new("/nonexistent/gods/cards.json");
    assert!(matches!(missing.load(), Err(GodsError::Io(_))));
}

#[test]
fn test_card_index_lookup() {
    let index = CardIndex::from_source(&BuiltinCatalog).unwrap();
    assert_eq!(index.len(), 39);
    assert_eq!(index.peoples().count(), 7);
    assert_eq!(index.get("Sky").unwrap().name, "Sky");
    assert!(matches!(index.get("Dragons"), Err(GodsError::UnknownCard(_))));
}

// =============================================================================
// Turn flow
// =============================================================================

#[test]
fn test_first_choice_is_main() {
    let mut state = quick_setup(2).unwrap();
    let decision = get_next_choice(&mut state).unwrap();

    assert!(decision.choice.is_main());
    assert_eq!(decision.choice.player, PlayerId::ZERO);
    assert_eq!(decision.actions.len(), 3);
    assert_eq!(state.phase, Phase::Main);
}

#[test]
fn test_play_spawns_hand_choice() {
    let mut state = quick_setup(2).unwrap();
    let decision = get_next_choice(&mut state).unwrap();

    apply_choice(&mut state, &decision.choice, 0);
    let next = get_next_choice(&mut state).unwrap();

    assert_eq!(next.choice.kind, ChoiceKind::PlayFromHand);
    assert_eq!(next.actions.len(), 5);
}

#[test]
fn test_declaring_end_gives_one_final_turn() {
    let mut state = quick_setup(2).unwrap();
    let decision = get_next_choice(&mut state).unwrap();

    apply_choice(&mut state, &decision.choice, 2);
    assert!(state.game_ending);
    assert_eq!(state.ending_player, Some(PlayerId::ZERO));

    let next = get_next_choice(&mut state).unwrap();
    assert!(next.choice.is_main());
    assert_eq!(next.choice.player, PlayerId::ONE);
    assert!(state.final_turn);

    // Player 2 passes: the turn ends and so does the game.
    let pass = next.actions.len() - 2;
    apply_choice(&mut state, &next.choice, pass);
    while let Some(decision) = get_next_choice(&mut state) {
        assert_ne!(decision.choice.player, PlayerId::ZERO);
        apply_choice(&mut state, &decision.choice, 0);
    }
    assert!(state.game_over);
}

// =============================================================================
// Whole games
// =============================================================================

#[test]
fn test_random_games_keep_zones_consistent() {
    for seed in 0..20 {
        let mut state = quick_setup(seed).unwrap();
        let mut agent = RandomAgent::new(seed + 100);
        let mut decisions = 0;

        while let Some(decision) = get_next_choice(&mut state) {
            let index = agent.choose_action(&state, &decision.choice, &decision.actions);
            apply_choice(&mut state, &decision.choice, index);
            state
                .check_zones()
                .unwrap_or_else(|err| panic!("seed {seed}: {err}"));
            decisions += 1;
            assert!(decisions < 10_000, "seed {seed}: game does not end");
        }

        assert!(state.game_over);
    }
}

#[test]
fn test_games_are_deterministic() {
    let play = |seed: u64| {
        let mut state = quick_setup(seed).unwrap();
        play_out(&mut state, &mut RandomAgent::new(9)).unwrap();
        snapshot::encode(&state).unwrap()
    };

    assert_eq!(play(17), play(17));
}

#[test]
fn test_forced_choices_are_not_asked() {
    for seed in 0..5 {
        let mut state = quick_setup(seed).unwrap();
        let mut agent = Counting::new(seed);

        play_out(&mut state, &mut agent).unwrap();

        assert!(agent.asked > 0);
        assert_eq!(agent.forced, 0);
    }
}

#[test]
fn test_run_game_narrates_result() {
    let mut state = quick_setup(5).unwrap();
    let mut agent = Counting::new(5);

    let result = run_game(&mut state, &mut agent).unwrap();

    assert_eq!(result, final_result(&state));
    let last = agent.messages.last().unwrap();
    assert_eq!(last, &format!("Result: {result}"));
    let [first, second] = scores(&state);
    assert!(agent
        .messages
        .contains(&format!("Player 1 scores {first} points")));
    assert!(agent
        .messages
        .contains(&format!("Player 2 scores {second} points")));
    assert!(agent.messages.iter().any(|m| m.starts_with("Player 1: ")));
}

#[test]
fn test_invalid_selection_aborts() {
    let mut state = quick_setup(5).unwrap();

    let err = play_out(&mut state, &mut OutOfRange).unwrap_err();

    assert!(matches!(err, GodsError::InvalidSelection { index: 99, options: 3 }));
}

#[test]
fn test_snapshot_resumes_identically() {
    let mut state = quick_setup(12).unwrap();
    let mut agent = RandomAgent::new(1);
    for _ in 0..6 {
        let Some(decision) = get_next_choice(&mut state) else {
            break;
        };
        let index = agent.choose_action(&state, &decision.choice, &decision.actions);
        apply_choice(&mut state, &decision.choice, index);
    }

    let mut restored = snapshot::decode(&snapshot::encode(&state).unwrap()).unwrap();
    play_out(&mut state, &mut RandomAgent::new(2)).unwrap();
    play_out(&mut restored, &mut RandomAgent::new(2)).unwrap();

    assert_eq!(
        snapshot::encode(&state).unwrap(),
        snapshot::encode(&restored).unwrap()
    );
}
