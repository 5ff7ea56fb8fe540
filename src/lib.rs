pub mod ai;
pub mod board;
pub mod card;
pub mod evaluate;
pub mod game;
pub mod input_handler;
pub mod move_generation;
pub mod search;
