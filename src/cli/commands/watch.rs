//! Watch command - watch the computer play against itself.

use std::time::Duration;

use structopt::StructOpt;

use quadline::ai::Difficulty;
use quadline::game::state::initialize_game;

use super::util::run_game_loop;
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(
        short,
        long,
        default_value = "2",
        help = "Number of computer players (2-6)"
    )]
    pub players: usize,
    #[structopt(short, long, default_value = "hard")]
    pub difficulty: Difficulty,
    #[structopt(
        long = "delay",
        default_value = "500",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
}

impl Command for WatchArgs {
    fn execute(self) {
        match initialize_game(&[], self.players, self.difficulty) {
            Ok(state) => run_game_loop(state, Duration::from_millis(self.delay_ms)),
            Err(error) => {
                eprintln!("{}", error);
                std::process::exit(1);
            }
        }
    }
}
