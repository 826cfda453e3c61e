//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - AiPlayer: fires at uniformly random points
//! - CliPlayer: reads targets typed by a human

use std::io;

use thiserror::Error;

use crate::common::{BoardError, ShotOutcome};
use crate::point::Point;

/// Failure that ends the match for the side that raised it.
#[derive(Debug, Error)]
pub enum PlayerError {
    /// The input source was closed before a target was chosen.
    #[error("input closed before a target was chosen")]
    InputClosed,
    #[error("failed to talk to the player")]
    Io(#[from] io::Error),
}

/// Interface implemented by different player types.
///
/// The game engine only ever asks for the next target and reports back what
/// happened; it never knows which kind of player it is driving.
pub trait Player {
    /// Choose the next point to fire at on the opponent's board.
    fn next_target(&mut self) -> Result<Point, PlayerError>;

    /// Inform the player of the result of its last accepted shot.
    fn handle_shot_result(&mut self, _target: Point, _outcome: ShotOutcome) {}

    /// Inform the player that its shot was refused. The player will be asked again.
    fn handle_rejected_shot(&mut self, _target: Point, _error: &BoardError) {}

    /// Inform the player of an opponent shot against its own board.
    fn handle_opponent_shot(&mut self, _target: Point, _outcome: ShotOutcome) {}
}

pub mod ai;
pub use ai::AiPlayer;

pub mod cli;
pub use cli::CliPlayer;
