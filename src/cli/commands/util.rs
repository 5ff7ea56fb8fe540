//! Shared game loop and terminal rendering for CLI commands.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use termion::color;

use quadline::ai;
use quadline::board::color::PlayerColor;
use quadline::board::coordinate::Coordinate;
use quadline::board::BOARD_SIZE;
use quadline::game::state::GameState;
use quadline::game::transitions::{apply_placement_and_advance, handle_pass};
use quadline::input_handler::{self, MoveInput};

/// Drives a game to completion. Computer turns pause for `move_delay` so
/// the board is readable as it evolves; human turns prompt on stdin.
pub(crate) fn run_game_loop(mut state: GameState, move_delay: Duration) {
    loop {
        render(&state);
        if state.is_game_over {
            break;
        }

        state = if state.current_player().is_computer {
            thread::sleep(move_delay);
            match ai::choose_move(&state) {
                Some(placement) => {
                    let selected = state
                        .select_card(placement.hand_index)
                        .expect("chosen hand index out of range");
                    apply_placement_and_advance(&selected, placement.target)
                        .expect("chosen placement is illegal")
                }
                None => handle_pass(&state),
            }
        } else {
            prompt_human(&state)
        };
    }
}

/// Prompts until the human produces a legal action, then returns the
/// resulting state. `quit` exits the process.
fn prompt_human(state: &GameState) -> GameState {
    loop {
        print!("> ");
        io::stdout().flush().ok();

        match input_handler::read_move() {
            Ok(MoveInput::Place { x, y, hand_index }) => {
                let selected = match state.select_card(hand_index) {
                    Some(selected) => selected,
                    None => {
                        println!("no card in slot {}", hand_index + 1);
                        continue;
                    }
                };
                match apply_placement_and_advance(&selected, Coordinate::new(x, y)) {
                    Some(next) => return next,
                    None => {
                        println!("illegal placement, try another cell or card");
                        continue;
                    }
                }
            }
            Ok(MoveInput::Pass) => return handle_pass(state),
            Ok(MoveInput::Quit) => std::process::exit(0),
            Err(error) => {
                println!("{}", error);
                continue;
            }
        }
    }
}

pub(crate) fn render(state: &GameState) {
    println!();
    println!("turn {} | {}", state.turn_number, state.message);
    println!();

    print!("   ");
    for x in 0..BOARD_SIZE {
        print!(" {} ", x);
    }
    println!();
    for y in 0..BOARD_SIZE {
        print!(" {} ", y);
        for x in 0..BOARD_SIZE {
            match state.board.get(Coordinate::new(x as u8, y as u8)) {
                Some(card) => print!(" {}{}{} ", paint(card.color), card.value, reset()),
                None => print!(" . "),
            }
        }
        println!();
    }
    println!();

    for player in state.players.iter() {
        let marker = if player.id == state.current_player().id && !state.is_game_over {
            "*"
        } else {
            " "
        };
        println!(
            "{} {}{}{}: {} points",
            marker,
            paint(player.color),
            player.name,
            reset(),
            player.score
        );
    }

    let current = state.current_player();
    if !current.is_computer && !state.is_game_over {
        let cards: Vec<String> = state
            .hand(current.id)
            .iter()
            .enumerate()
            .map(|(i, card)| format!("[{}] {}", i + 1, card.value))
            .collect();
        println!("hand: {}", cards.join("  "));
        println!("commands: place X Y N | pass | quit");
    }
}

fn paint(player_color: PlayerColor) -> String {
    match player_color {
        PlayerColor::Red => color::Fg(color::Red).to_string(),
        PlayerColor::Blue => color::Fg(color::Blue).to_string(),
        PlayerColor::Green => color::Fg(color::Green).to_string(),
        PlayerColor::Yellow => color::Fg(color::Yellow).to_string(),
        PlayerColor::Purple => color::Fg(color::Magenta).to_string(),
        PlayerColor::Orange => color::Fg(color::Rgb(255, 165, 0)).to_string(),
    }
}

fn reset() -> String {
    color::Fg(color::Reset).to_string()
}
