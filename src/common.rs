//! Common types for Sea Battle: board errors and shot outcomes.

use thiserror::Error;

use crate::point::Point;

/// Result of a shot that the board accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot struck a ship that still has hit points left.
    Hit,
    /// Shot struck the last intact cell of a ship.
    Sunk,
    /// Shot landed in open water.
    Miss,
}

impl ShotOutcome {
    /// Whether the shooter keeps the turn after this outcome.
    pub fn grants_another_shot(self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Sunk)
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    /// A placement cell or shot target lies off the board.
    #[error("{0} is outside the board")]
    OutOfBounds(Point),
    /// A placement cell overlaps a ship or the buffer around one.
    #[error("{0} is taken by another ship or too close to one")]
    Collision(Point),
    /// A ship with no cells was offered for placement.
    #[error("ship at {0} has no cells")]
    EmptyShip(Point),
    /// A shot was already fired at this point.
    #[error("{0} was already fired upon")]
    AlreadyTargeted(Point),
    /// Random generation could not fit the fleet on the board.
    #[error("fleet does not fit on the board after {restarts} attempts")]
    FleetDoesNotFit { restarts: usize },
}
