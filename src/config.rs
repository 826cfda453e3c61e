use thiserror::Error;

pub const BOARD_SIZE: usize = 6;
pub const NUM_SHIPS: usize = 7;
/// Ship lengths placed on every board, in placement order.
pub const FLEET: [usize; NUM_SHIPS] = [3, 2, 2, 1, 1, 1, 1];

/// Placement attempts allowed for a single board before it is thrown away.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;
/// Discarded boards allowed before random generation gives up.
pub const MAX_BOARD_RESTARTS: usize = 1000;
/// Largest board side accepted; row and column labels stay two digits wide.
pub const MAX_BOARD_SIZE: usize = 99;

/// Rejected game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size must be at least 1")]
    ZeroSize,
    #[error("board size {0} exceeds the maximum of {}", MAX_BOARD_SIZE)]
    TooLarge(usize),
    #[error("fleet must contain at least one ship")]
    EmptyFleet,
    #[error("ship lengths must be at least 1")]
    ZeroLengthShip,
    #[error("ship of length {length} does not fit on a {size}x{size} board")]
    ShipTooLong { length: usize, size: usize },
}

/// Board dimension and fleet shared by both sides of a game.
///
/// Only built through [`GameConfig::new`] or [`Default`], so a value in hand is
/// always valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    size: usize,
    fleet: Vec<usize>,
}

impl GameConfig {
    pub fn new(size: usize, fleet: Vec<usize>) -> Result<Self, ConfigError> {
        let config = Self { size, fleet };
        config.validate()?;
        Ok(config)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Ship lengths, in placement order.
    pub fn fleet(&self) -> &[usize] {
        &self.fleet
    }

    /// Check that every ship can at least fit on an empty board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        if self.size > MAX_BOARD_SIZE {
            return Err(ConfigError::TooLarge(self.size));
        }
        if self.fleet.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        for &length in &self.fleet {
            if length == 0 {
                return Err(ConfigError::ZeroLengthShip);
            }
            if length > self.size {
                return Err(ConfigError::ShipTooLong {
                    length,
                    size: self.size,
                });
            }
        }
        Ok(())
    }

    /// Number of sunk ships that ends the game.
    pub fn win_threshold(&self) -> usize {
        self.fleet.len()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: BOARD_SIZE,
            fleet: FLEET.to_vec(),
        }
    }
}
