//! Play command - play a game against the computer.

use std::time::Duration;

use structopt::StructOpt;

use quadline::ai::Difficulty;
use quadline::game::state::initialize_game;

use super::util::run_game_loop;
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "you")]
    pub name: String,
    #[structopt(
        short = "o",
        long = "opponents",
        default_value = "1",
        help = "Number of computer opponents (1-5)"
    )]
    pub opponents: usize,
    #[structopt(short, long, default_value = "hard")]
    pub difficulty: Difficulty,
}

impl Command for PlayArgs {
    fn execute(self) {
        match initialize_game(std::slice::from_ref(&self.name), self.opponents, self.difficulty) {
            Ok(state) => run_game_loop(state, Duration::from_millis(300)),
            Err(error) => {
                eprintln!("{}", error);
                std::process::exit(1);
            }
        }
    }
}
