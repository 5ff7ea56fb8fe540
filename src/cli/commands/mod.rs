//! CLI command implementations.

pub trait Command {
    fn execute(self);
}

pub mod play;
pub mod watch;

// Shared game loop and rendering
pub(crate) mod util;
