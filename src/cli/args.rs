//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{play::PlayArgs, watch::WatchArgs};

#[derive(StructOpt)]
#[structopt(
    name = "quadline",
    about = "A tactical card-placement game: claim four in a row on a 9x9 grid before your opponents do."
)]
pub enum Quadline {
    #[structopt(
        name = "play",
        about = "Play a game against one or more computer opponents at the given `--difficulty` (default: hard)."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "watch",
        about = "Watch computer players face each other at the given `--difficulty` (default: hard)."
    )]
    Watch(WatchArgs),
}

impl crate::cli::commands::Command for Quadline {
    fn execute(self) {
        match self {
            Self::Play(cmd) => cmd.execute(),
            Self::Watch(cmd) => cmd.execute(),
        }
    }
}
