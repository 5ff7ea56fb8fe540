use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};

use quadline::ai::Difficulty;
use quadline::board::color::PlayerColor;
use quadline::board::Board;
use quadline::card::{Card, Deck, Hand};
use quadline::card_grid;
use quadline::game::player::{Player, PlayerId};
use quadline::game::state::GameState;
use quadline::move_generation::compute_valid_moves;
use quadline::search::{search_best_placement, SearchContext};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("search depth 3 midgame", |b| {
        let state = midgame_state();
        b.iter(|| {
            let mut context = SearchContext::with_limits(3, Duration::from_secs(60));
            search_best_placement(&mut context, &state).unwrap()
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn midgame_state() -> GameState {
    let board: Board = card_grid! {
        . . . . . . . . .
        . . . . . . . . .
        . . b2 r7 . . . . .
        . . r4 b6 b3 . . . .
        . . . r5 r2 b8 . . .
        . . . b1 r9 . . . .
        . . . . b4 r3 . . .
        . . . . . . . . .
        . . . . . . . . .
    };

    let players = vec![
        Player {
            id: PlayerId(0),
            name: "Red".to_string(),
            color: PlayerColor::Red,
            is_computer: true,
            score: 0,
        },
        Player {
            id: PlayerId(1),
            name: "Blue".to_string(),
            color: PlayerColor::Blue,
            is_computer: true,
            score: 0,
        },
    ];
    let hands: Vec<Hand> = vec![hand_of(PlayerId(0), &[3, 6, 9]), hand_of(PlayerId(1), &[2, 5, 8])];
    let valid_moves = compute_valid_moves(&board, 14, PlayerId(0));

    GameState {
        board,
        players,
        current_player_index: 0,
        hands,
        decks: vec![Deck::default(), Deck::default()],
        selected_card: None,
        is_game_over: false,
        winner: None,
        history: Vec::new(),
        message: String::new(),
        turn_number: 14,
        difficulty: Difficulty::Hard,
        valid_moves,
    }
}

fn hand_of(player: PlayerId, values: &[u8]) -> Hand {
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| Card {
            value,
            id: format!("{}-card-{}", player, i),
        })
        .collect()
}
