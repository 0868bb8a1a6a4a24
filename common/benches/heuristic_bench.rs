use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use common::games::SessionRng;
use common::games::tictactoe::{
    BotInput, BotType, GameStatus, MatchSettings, Position, TicTacToeGameState, calculate_move,
};

fn classic_state(moves: &[(usize, usize)]) -> TicTacToeGameState {
    let settings = MatchSettings::classic(true);
    let mut state = TicTacToeGameState::new(settings.field_size, settings.player_marks())
        .expect("classic settings are valid");
    for &(row, col) in moves {
        state.place_mark(Position::new(row, col)).expect("scripted move is legal");
    }
    state
}

fn bench_heuristic_empty_board(c: &mut Criterion) {
    let state = classic_state(&[]);
    let mut rng = SessionRng::new(1);
    c.bench_function("heuristic_empty_board", |b| {
        b.iter(|| {
            let input = BotInput::from_game_state(&state);
            calculate_move(BotType::LineHeuristic, black_box(&input), &mut rng)
        })
    });
}

fn bench_heuristic_mid_game(c: &mut Criterion) {
    let state = classic_state(&[(0, 0), (1, 1), (2, 2), (0, 2)]);
    let mut rng = SessionRng::new(2);
    c.bench_function("heuristic_mid_game", |b| {
        b.iter(|| {
            let input = BotInput::from_game_state(&state);
            calculate_move(BotType::LineHeuristic, black_box(&input), &mut rng)
        })
    });
}

fn bench_full_match(c: &mut Criterion) {
    c.bench_function("random_vs_heuristic_match", |b| {
        let mut rng = SessionRng::new(3);
        b.iter(|| {
            let mut state = classic_state(&[]);
            while *state.status() == GameStatus::InProgress {
                let bot_type = if state.current_player_index() == 0 {
                    BotType::Random
                } else {
                    BotType::LineHeuristic
                };
                let pos = {
                    let input = BotInput::from_game_state(&state);
                    calculate_move(bot_type, &input, &mut rng).expect("match in progress")
                };
                state.place_mark(pos).expect("bot picks empty cells");
            }
            black_box(state.status().clone())
        })
    });
}

criterion_group!(benches, bench_heuristic_empty_board, bench_heuristic_mid_game, bench_full_match);
criterion_main!(benches);
