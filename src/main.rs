mod cli;

use structopt::StructOpt;

use cli::commands::Command;
use cli::Quadline;

fn main() {
    env_logger::init();
    Quadline::from_args().execute();
}
