pub mod error;
pub mod history;
pub mod player;
pub mod state;
pub mod transitions;
