//! Turn-by-turn match between two players.

use log::{debug, info, trace};
use rand::Rng;
use thiserror::Error;

use crate::board::Board;
use crate::common::{BoardError, ShotOutcome};
use crate::config::GameConfig;
use crate::player::{Player, PlayerError};
use crate::point::Point;

/// One of the two sides of a match. Side A moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

/// Where the match currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    AwaitingSideA,
    AwaitingSideB,
    SideAWon,
    SideBWon,
}

impl TurnState {
    /// Side expected to fire next, or `None` once the match is over.
    pub fn active_side(self) -> Option<Side> {
        match self {
            TurnState::AwaitingSideA => Some(Side::A),
            TurnState::AwaitingSideB => Some(Side::B),
            TurnState::SideAWon | TurnState::SideBWon => None,
        }
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            TurnState::SideAWon => Some(Side::A),
            TurnState::SideBWon => Some(Side::B),
            TurnState::AwaitingSideA | TurnState::AwaitingSideB => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.winner().is_some()
    }

    fn awaiting(side: Side) -> Self {
        match side {
            Side::A => TurnState::AwaitingSideA,
            Side::B => TurnState::AwaitingSideB,
        }
    }

    fn won(side: Side) -> Self {
        match side {
            Side::A => TurnState::SideAWon,
            Side::B => TurnState::SideBWon,
        }
    }
}

/// Errors that stop a match.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("the match is already over")]
    Finished,
    #[error("side {side:?} could not choose a target")]
    PlayerAborted {
        side: Side,
        #[source]
        source: PlayerError,
    },
}

/// An accepted shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotReport {
    pub side: Side,
    pub target: Point,
    pub outcome: ShotOutcome,
}

/// Match controller: each side owns one board and fires at the other.
pub struct GameEngine {
    boards: [Board; 2],
    players: [Box<dyn Player>; 2],
    state: TurnState,
    win_threshold: usize,
    shots: usize,
}

impl GameEngine {
    /// Build a match from already populated boards. `board_a` belongs to side A and is
    /// the board side B fires at, and vice versa.
    pub fn new(
        win_threshold: usize,
        board_a: Board,
        player_a: Box<dyn Player>,
        board_b: Board,
        player_b: Box<dyn Player>,
    ) -> Self {
        Self {
            boards: [board_a, board_b],
            players: [player_a, player_b],
            state: TurnState::AwaitingSideA,
            win_threshold,
            shots: 0,
        }
    }

    /// Generate random boards for both sides and build the match. Side B's board is
    /// hidden, as it belongs to the opponent of the local player.
    pub fn setup<R: Rng + ?Sized>(
        config: &GameConfig,
        player_a: Box<dyn Player>,
        player_b: Box<dyn Player>,
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        let board_a = Board::random(config, rng)?;
        let mut board_b = Board::random(config, rng)?;
        board_b.set_hidden(true);
        info!(
            "starting match on a {0}x{0} board with {1} ships per side",
            config.size(),
            config.fleet().len()
        );
        Ok(Self::new(
            config.win_threshold(),
            board_a,
            player_a,
            board_b,
            player_b,
        ))
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn winner(&self) -> Option<Side> {
        self.state.winner()
    }

    /// Board owned by `side`.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    /// Number of accepted shots so far, both sides combined.
    pub fn shots(&self) -> usize {
        self.shots
    }

    /// Let the active side fire until one shot is accepted, then advance the state.
    ///
    /// Refused shots (off the board or repeated) are reported to the shooter, who is
    /// asked again without losing the turn.
    pub fn play_turn(&mut self) -> Result<ShotReport, GameError> {
        let side = self.state.active_side().ok_or(GameError::Finished)?;
        let opponent = side.opponent();

        let (target, outcome) = loop {
            let target = self.players[side.index()]
                .next_target()
                .map_err(|source| GameError::PlayerAborted { side, source })?;
            match self.boards[opponent.index()].shoot(target) {
                Ok(outcome) => break (target, outcome),
                Err(err) => {
                    debug!("side {:?} shot refused: {}", side, err);
                    self.players[side.index()].handle_rejected_shot(target, &err);
                }
            }
        };
        self.shots += 1;
        trace!("side {:?} fired at {}: {:?}", side, target, outcome);
        self.players[side.index()].handle_shot_result(target, outcome);
        self.players[opponent.index()].handle_opponent_shot(target, outcome);

        self.state = if let Some(winner) = self.defeated_side().map(Side::opponent) {
            info!("side {:?} wins after {} shots", winner, self.shots);
            TurnState::won(winner)
        } else if outcome.grants_another_shot() {
            TurnState::awaiting(side)
        } else {
            TurnState::awaiting(opponent)
        };

        Ok(ShotReport {
            side,
            target,
            outcome,
        })
    }

    /// Play until one side has lost every ship and return the winner.
    pub fn run(&mut self) -> Result<Side, GameError> {
        loop {
            if let Some(winner) = self.state.winner() {
                return Ok(winner);
            }
            self.play_turn()?;
        }
    }

    fn defeated_side(&self) -> Option<Side> {
        [Side::A, Side::B]
            .into_iter()
            .find(|side| self.board(*side).is_defeated(self.win_threshold))
    }
}
