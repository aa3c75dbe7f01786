//! Branching costs the searches pay at every node: cloning a state,
//! listing the actions of a decision, and playing a random game out.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gods_engine::agents::RandomAgent;
use gods_engine::rules::{get_next_choice, play_out, quick_setup};

fn bench_clone(c: &mut Criterion) {
    let state = quick_setup(1).expect("builtin catalog deals");
    c.bench_function("state_clone", |b| b.iter(|| black_box(state.clone())));
}

fn bench_generate_actions(c: &mut Criterion) {
    let mut state = quick_setup(1).expect("builtin catalog deals");
    let decision = get_next_choice(&mut state).expect("fresh game has a decision");
    c.bench_function("generate_actions", |b| {
        b.iter(|| black_box(decision.choice.generate_actions(black_box(&state))))
    });
}

fn bench_random_playout(c: &mut Criterion) {
    let state = quick_setup(1).expect("builtin catalog deals");
    c.bench_function("random_playout", |b| {
        b.iter(|| {
            let mut game = state.clone();
            let mut agent = RandomAgent::new(7);
            play_out(&mut game, &mut agent).expect("random agent answers in range");
            black_box(game.game_over)
        })
    });
}

criterion_group!(benches, bench_clone, bench_generate_actions, bench_random_playout);
criterion_main!(benches);
