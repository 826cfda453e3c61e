mod board;
mod common;
mod config;
mod game;
mod logging;
pub mod player;
mod point;
mod ship;
pub mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use logging::init_logging;
pub use player::{AiPlayer, CliPlayer, Player, PlayerError};
pub use point::Point;
pub use ship::*;
