//! Benchmarks for dealing, move enumeration and state cloning.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use klondike_engine::{EntropySource, GameConfig, GameRng, GameState};

fn play(state: &mut GameState, rng: &mut GameRng, steps: usize) {
    for _ in 0..steps {
        let moves = state.legal_moves();
        if moves.is_empty() || rng.below(4) == 0 {
            state.draw_or_recycle();
        } else {
            let request = moves[rng.below(moves.len())];
            let _ = state.request_move(request);
        }
    }
}

fn bench_new_game(c: &mut Criterion) {
    let mut seed = 0u64;
    c.bench_function("new_game", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(GameState::new_game(&GameConfig::new().with_seed(seed)))
        })
    });
}

fn bench_legal_moves(c: &mut Criterion) {
    let mut state = GameState::new_game(&GameConfig::new().with_seed(3));
    play(&mut state, &mut GameRng::new(3), 100);

    c.bench_function("legal_moves", |b| b.iter(|| black_box(state.legal_moves())));
}

fn bench_random_play(c: &mut Criterion) {
    c.bench_function("random_play_200", |b| {
        b.iter(|| {
            let mut state = GameState::new_game(&GameConfig::new().with_seed(7));
            play(&mut state, &mut GameRng::new(7), 200);
            black_box(state.score())
        })
    });
}

fn bench_state_clone(c: &mut Criterion) {
    let mut state = GameState::new_game(&GameConfig::new().with_seed(11));
    play(&mut state, &mut GameRng::new(11), 500);

    c.bench_function("state_clone", |b| b.iter(|| black_box(state.clone())));
}

criterion_group!(
    benches,
    bench_new_game,
    bench_legal_moves,
    bench_random_play,
    bench_state_clone
);
criterion_main!(benches);
