//! Property tests over random tables and random games.

use gods_engine::agents::RandomAgent;
use gods_engine::cards::{effective_power, BuiltinCatalog, Card, CardIndex};
use gods_engine::choice::combinations::{combinations, SelectionMode};
use gods_engine::core::{GameRng, GameState, PlayerId};
use gods_engine::rules::{final_result, play_out, quick_setup, scores, GameResult};
use gods_engine::search::sample_state;
use gods_engine::zones::{Location, Zone};
use proptest::prelude::*;

const WONDERS: &[&str] = &[
    "Sky", "Sun", "Fire", "Knowledge", "Seas", "Love", "Animals", "Mountains", "Deserts", "Moon",
];

const TARGETS: &[&str] = &["Aurora", "Flood", "Revolt", "Egyptians", "Vikings", "Sky", "Sun"];

fn binomial(n: usize, k: usize) -> usize {
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Whatever wonders surround it, no card's power drops below zero.
    #[test]
    fn prop_effective_power_never_negative(
        wonders in prop::collection::vec((0..WONDERS.len(), 0..2u8, 0..8i32), 0..6),
        target in 0..TARGETS.len(),
        power in 0..8i32,
        counters in -10..10i32,
    ) {
        let index = CardIndex::from_source(&BuiltinCatalog).unwrap();
        let mut state = GameState::new(0);
        let mut placed = Vec::new();
        for (name, side, wonder_power) in wonders {
            let record = index.get(WONDERS[name]).unwrap();
            let location = Location::of(Zone::Wonders, PlayerId::new(side));
            placed.push(state.add_card(Card::from_record(record, wonder_power), location));
        }
        let record = index.get(TARGETS[target]).unwrap();
        let location = if record.is_people() {
            Location::PEOPLE
        } else {
            Location::of(Zone::Hand, PlayerId::ONE)
        };
        let card = state.add_card(Card::from_record(record, power), location);
        state.card_mut(card).counters = counters;

        prop_assert!(effective_power(&state, card) >= 0);
        for wonder in placed {
            prop_assert!(effective_power(&state, wonder) >= 0);
        }
    }

    /// Selection enumerations have the binomial sizes.
    #[test]
    fn prop_combination_counts(n in 0..7usize, pick in 0..8usize) {
        let candidates: Vec<usize> = (0..n).collect();
        let top = pick.min(n);

        let up_to = combinations(&candidates, SelectionMode::UpTo(pick));
        let expected: usize = (0..=top).map(|k| binomial(n, k)).sum();
        prop_assert_eq!(up_to.len(), expected);

        let exactly = combinations(&candidates, SelectionMode::Exactly(pick));
        prop_assert_eq!(exactly.len(), binomial(n, top));
        prop_assert!(exactly.iter().all(|p| p.len() == top));
    }

    /// Redealing hidden cards keeps every zone size and all visible zones.
    #[test]
    fn prop_sample_state_keeps_shape(seed in any::<u64>(), sample_seed in any::<u64>()) {
        let state = quick_setup(seed).unwrap();
        let mut rng = GameRng::new(sample_seed);

        let sampled = sample_state(&state, PlayerId::ZERO, &mut rng);

        prop_assert!(sampled.check_zones().is_ok());
        for player in PlayerId::all() {
            prop_assert_eq!(sampled.player(player).hand.len(), state.player(player).hand.len());
            prop_assert_eq!(sampled.player(player).deck.len(), state.player(player).deck.len());
        }
        prop_assert_eq!(&sampled.player(PlayerId::ZERO).hand, &state.player(PlayerId::ZERO).hand);
        prop_assert_eq!(&sampled.peoples, &state.peoples);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Random games always finish with consistent zones, and the result
    /// agrees with the scores.
    #[test]
    fn prop_random_games_finish(seed in any::<u64>(), agent_seed in any::<u64>()) {
        let mut state = quick_setup(seed).unwrap();
        play_out(&mut state, &mut RandomAgent::new(agent_seed)).unwrap();

        prop_assert!(state.game_over);
        prop_assert!(state.check_zones().is_ok());
        let [first, second] = scores(&state);
        match final_result(&state) {
            GameResult::Winner(PlayerId::ZERO) => prop_assert!(first >= second),
            GameResult::Winner(_) => prop_assert!(second >= first),
            GameResult::Draw => prop_assert_eq!(first, second),
        }
    }
}
