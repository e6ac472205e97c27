use criterion::{black_box, criterion_group, criterion_main, Criterion};

use boost::board::{PlayerId, Point};
use boost::game::GameState;
use boost::movegen::movement::legal_moves;
use boost::movegen::paths::PathSearch;
use boost::resolve::outcome;
use boost::ruleset::{new_game, Rules};

const P1: PlayerId = PlayerId(0);

const CROWDED: &str = "
P2 P2 P2 P2 .  P2 P2 P2 P2
.  .  .  D0 .  .  .  .  .
.  .  P2 .  .  .  D0 .  .
.  .  .  .  P1 .  .  .  .
.  D0 .  P1 D0 P1 .  D0 .
.  .  .  .  P1 .  .  .  .
.  .  D0 .  .  .  P1 .  .
.  .  .  .  .  D0 .  .  .
P1 P1 P1 .  .  .  P1 P1 P1
";

fn standard_game() -> GameState {
    new_game(2, 9, Some(7), 1).unwrap()
}

fn crowded_game() -> GameState {
    GameState::from_layout(CROWDED, 2, Rules::default()).unwrap()
}

fn bench_legal_actions_opening(c: &mut Criterion) {
    let game = standard_game();
    c.bench_function("legal_actions_opening", |b| {
        b.iter(|| black_box(&game).legal_actions(black_box(P1)))
    });
}

fn bench_legal_actions_crowded(c: &mut Criterion) {
    let game = crowded_game();
    c.bench_function("legal_actions_crowded", |b| {
        b.iter(|| black_box(&game).legal_actions(black_box(P1)))
    });
}

fn bench_legal_moves_crowded(c: &mut Criterion) {
    let game = crowded_game();
    c.bench_function("legal_moves_crowded", |b| {
        b.iter(|| legal_moves(black_box(game.board()), black_box(P1)))
    });
}

fn bench_path_enumeration(c: &mut Criterion) {
    let game = crowded_game();
    // Five steps is the largest budget a piece can have.
    let start = Point::new(0, 4);
    c.bench_function("paths_five_steps", |b| {
        b.iter(|| PathSearch::new(game.board(), black_box(start), 5).iter().count())
    });
}

fn bench_outcome(c: &mut Criterion) {
    let game = crowded_game();
    let actions = game.legal_actions(P1);
    c.bench_function("outcome_all_actions", |b| {
        b.iter(|| {
            actions
                .iter()
                .filter_map(|a| outcome(game.board(), P1, black_box(a)).ok())
                .count()
        })
    });
}

fn bench_game_clone(c: &mut Criterion) {
    let game = standard_game();
    c.bench_function("game_state_clone", |b| b.iter(|| black_box(&game).clone()));
}

criterion_group!(
    benches,
    bench_legal_actions_opening,
    bench_legal_actions_crowded,
    bench_legal_moves_crowded,
    bench_path_enumeration,
    bench_outcome,
    bench_game_clone,
);
criterion_main!(benches);
