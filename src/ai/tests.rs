use super::*;
use crate::board::color::PlayerColor;
use crate::board::coordinate::Coordinate;
use crate::card::{Card, Deck, Hand};
use crate::card_grid;
use crate::game::player::PlayerId;
use crate::move_generation::compute_valid_moves;

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

fn two_player_state(
    board: Board,
    red_values: &[u8],
    blue_values: &[u8],
    turn_number: u32,
    difficulty: Difficulty,
) -> GameState {
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
    let hands = vec![
        hand_of(PlayerId(0), red_values),
        hand_of(PlayerId(1), blue_values),
    ];
    let valid_moves = compute_valid_moves(&board, turn_number, PlayerId(0));

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
        turn_number,
        difficulty,
        valid_moves,
    }
}

#[test]
fn test_difficulty_parses_case_insensitively() {
    assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
    assert_eq!("Medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
    assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
    assert!("brutal".parse::<Difficulty>().is_err());
}

#[test]
fn test_difficulty_displays_capitalized() {
    assert_eq!(Difficulty::Easy.to_string(), "Easy");
    assert_eq!(Difficulty::Medium.to_string(), "Medium");
    assert_eq!(Difficulty::Hard.to_string(), "Hard");
}

#[test]
fn test_easy_prefers_the_richest_capture() {
    let board = card_grid! {
        . . . . . . . . .
        . . . . . . . . .
        . . . . . . . . .
        . . . . . . . . .
        . . . b2 b4 . . . .
        . . . . . . . . .
        . . . . . . . . .
        . . . . . . . . .
        . . . . . . . . .
    };
    let state = two_player_state(board, &[5, 3], &[9], 10, Difficulty::Easy);

    let choice = easy::choose(&state).unwrap();
    assert_eq!(choice.target, Coordinate::new(4, 4));
    assert_eq!(choice.value, 5);
}

#[test]
fn test_easy_plays_the_highest_card_without_captures() {
    let board = card_grid! {
        . . . . . . . . .
        . . . . . . . . .
        . . . . . . . . .
        . . . . . . . . .
        . . . . r9 . . . .
        . . . . . . . . .
        . . . . . . . . .
        . . . . . . . . .
        . . . . . . . . .
    };
    let state = two_player_state(board, &[2, 7, 4], &[9], 10, Difficulty::Easy);

    let choice = easy::choose(&state).unwrap();
    assert_eq!(choice.value, 7);
}

#[test]
fn test_find_immediate_win_completes_the_line() {
    let board = card_grid! {
        . . . . . . . . .
        . . . . . . . . .
        . . . . . . . . .
        . . . . . . . . .
        . . r1 r2 r3 . . . .
        . . . . . . . . .
        . . . . . . . . .
        . . . . . . . . .
        . . . . . . . . .
    };
    let state = two_player_state(board, &[1], &[9], 10, Difficulty::Medium);

    let win = find_immediate_win(&state).unwrap();
    assert!(win.target == Coordinate::new(1, 4) || win.target == Coordinate::new(5, 4));
}

#[test]
fn test_medium_blocks_an_imminent_win() {
    // Blue completes the line at (5, 4) next turn unless red takes that cell.
    let board = card_grid! {
        . . . . . . . . .
        . . . . . . . . .
        . . . . . . . . .
        . . . . . . . . .
        . r5 b9 b9 b9 . . . .
        . . . . . . . . .
        . . . . . . . . .
        . . . . . . . . .
        . . . . . . . . .
    };
    let state = two_player_state(board, &[2], &[9, 9, 9], 10, Difficulty::Medium);

    let choice = medium::choose(&state).unwrap();
    assert_eq!(choice.target, Coordinate::new(5, 4));
}

#[test]
fn test_medium_takes_its_own_win_over_a_block() {
    // Both sides have three in a row; winning beats blocking.
    let board = card_grid! {
        . . . . . . . . .
        . . . . . . . . .
        . . r1 r2 r3 . . . .
        . . . . . . . . .
        . r5 b9 b9 b9 . . . .
        . . . . . . . . .
        . . . . . . . . .
        . . . . . . . . .
        . . . . . . . . .
    };
    let state = two_player_state(board, &[1], &[9, 9, 9], 10, Difficulty::Medium);

    let choice = medium::choose(&state).unwrap();
    let mut scratch = state.board.clone();
    assert!(placement_wins(
        &mut scratch,
        state.current_player(),
        &choice
    ));
}

#[test]
fn test_hard_blocks_before_searching() {
    let board = card_grid! {
        . . . . . . . . .
        . . . . . . . . .
        . . . . . . . . .
        . . . . . . . . .
        . r5 b9 b9 b9 . . . .
        . . . . . . . . .
        . . . . . . . . .
        . . . . . . . . .
        . . . . . . . . .
    };
    let state = two_player_state(board, &[2], &[9, 9, 9], 10, Difficulty::Hard);

    let mut context = crate::search::SearchContext::new();
    let choice = hard::choose_with_context(&state, &mut context).unwrap();
    assert_eq!(choice.target, Coordinate::new(5, 4));
    // The preface answered; the search never ran.
    assert_eq!(context.searched_position_count(), 0);
}

#[test]
fn test_choose_move_returns_none_with_an_empty_hand() {
    let board = card_grid! {
        . . . . . . . . .
        . . . . . . . . .
        . . . . . . . . .
        . . . . . . . . .
        . . . . b4 . . . .
        . . . . . . . . .
        . . . . . . . . .
        . . . . . . . . .
        . . . . . . . . .
    };
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let state = two_player_state(board.clone(), &[], &[9], 10, difficulty);
        assert_eq!(choose_move(&state), None, "{} should pass", difficulty);
    }
}

#[test]
fn test_blocking_scans_every_opponent() {
    // The threat comes from the third seat, not the next player.
    let board = card_grid! {
        . . . . . . . . .
        . . . . . . . . .
        . . . . . . . . .
        . . . . . . . . .
        . r5 g9 g9 g9 . . . .
        . . . . . . . . .
        . . . . . . . . .
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
        Player {
            id: PlayerId(2),
            name: "Green".to_string(),
            color: PlayerColor::Green,
            is_computer: true,
            score: 0,
        },
    ];
    let hands = vec![
        hand_of(PlayerId(0), &[2]),
        hand_of(PlayerId(1), &[1]),
        hand_of(PlayerId(2), &[9]),
    ];
    let valid_moves = compute_valid_moves(&board, 12, PlayerId(0));
    let state = GameState {
        board,
        players,
        current_player_index: 0,
        hands,
        decks: vec![Deck::default(), Deck::default(), Deck::default()],
        selected_card: None,
        is_game_over: false,
        winner: None,
        history: Vec::new(),
        message: String::new(),
        turn_number: 12,
        difficulty: Difficulty::Medium,
        valid_moves,
    };

    let block = find_blocking_move(&state).unwrap();
    assert_eq!(block.target, Coordinate::new(5, 4));
}
