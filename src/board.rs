//! Board state: ship placement, the adjacency buffer and shot resolution.

use std::collections::HashSet;

use log::{debug, trace};
use rand::Rng;

use crate::common::{BoardError, ShotOutcome};
use crate::config::{GameConfig, MAX_BOARD_RESTARTS, MAX_PLACEMENT_ATTEMPTS};
use crate::point::Point;
use crate::ship::{Orientation, Ship};

/// What a single cell currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Empty,
    Occupied,
    Miss,
    Hit,
}

/// One side's board.
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    hidden: bool,
    cells: Vec<CellState>,
    forbidden: HashSet<Point>,
    ships: Vec<Ship>,
    sunk_count: usize,
    fired_at: HashSet<Point>,
}

impl Board {
    /// Create an empty `size`×`size` board.
    ///
    /// Meant for hand-built boards; sizes coming from users go through
    /// [`GameConfig::new`], which caps them at [`MAX_BOARD_SIZE`](crate::MAX_BOARD_SIZE).
    pub fn new(size: usize) -> Self {
        Board {
            size,
            hidden: false,
            cells: vec![CellState::Empty; size * size],
            forbidden: HashSet::new(),
            ships: Vec::new(),
            sunk_count: 0,
            fired_at: HashSet::new(),
        }
    }

    /// Generate a board with every ship of `config.fleet()` placed at random.
    ///
    /// Each board gets [`MAX_PLACEMENT_ATTEMPTS`] tries in total. Random placement does
    /// not backtrack, so a bad early ship can leave no room for later ones; in that
    /// case the whole board is discarded and generation starts over.
    pub fn random<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Self, BoardError> {
        let size = config.size();
        Self::populate(config, || {
            let bow = Point::new(rng.random_range(0..size), rng.random_range(0..size));
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            (bow, orientation)
        })
    }

    /// Fill a board from a stream of candidate placements, restarting on exhaustion.
    fn populate<F>(config: &GameConfig, mut candidate: F) -> Result<Self, BoardError>
    where
        F: FnMut() -> (Point, Orientation),
    {
        for restart in 0..MAX_BOARD_RESTARTS {
            if let Some(mut board) = Self::try_populate(config, &mut candidate) {
                board.begin();
                return Ok(board);
            }
            debug!("discarding unfinishable board (restart {})", restart + 1);
        }
        Err(BoardError::FleetDoesNotFit {
            restarts: MAX_BOARD_RESTARTS,
        })
    }

    /// One board's worth of attempts. The budget is shared by the whole fleet.
    fn try_populate<F>(config: &GameConfig, candidate: &mut F) -> Option<Self>
    where
        F: FnMut() -> (Point, Orientation),
    {
        let mut board = Board::new(config.size());
        let mut attempts = 0;
        for &length in config.fleet() {
            loop {
                attempts += 1;
                if attempts > MAX_PLACEMENT_ATTEMPTS {
                    return None;
                }
                let (bow, orientation) = candidate();
                match board.place(Ship::new(bow, length, orientation)) {
                    Ok(()) => break,
                    Err(BoardError::OutOfBounds(_) | BoardError::Collision(_)) => continue,
                    Err(_) => return None,
                }
            }
        }
        Some(board)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether un-hit ship cells should be concealed when rendered.
    pub fn hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships sunk so far.
    pub fn sunk_count(&self) -> usize {
        self.sunk_count
    }

    /// Points unavailable for further placement.
    pub fn forbidden(&self) -> &HashSet<Point> {
        &self.forbidden
    }

    /// Points fired upon since [`Board::begin`].
    pub fn fired_at(&self) -> &HashSet<Point> {
        &self.fired_at
    }

    /// State of the cell at `p`, or `None` off the board.
    pub fn cell(&self, p: Point) -> Option<CellState> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Rows of cell states, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.size.max(1))
    }

    fn index(&self, p: Point) -> Option<usize> {
        p.in_bounds(self.size).then(|| p.x() * self.size + p.y())
    }

    /// Place `ship`. Nothing changes unless every cell is on the board and clear of
    /// other ships and their buffers.
    pub fn place(&mut self, ship: Ship) -> Result<(), BoardError> {
        if ship.length() == 0 {
            return Err(BoardError::EmptyShip(ship.bow()));
        }
        for cell in ship.cells() {
            if !cell.in_bounds(self.size) {
                return Err(BoardError::OutOfBounds(cell));
            }
            if self.forbidden.contains(&cell) {
                return Err(BoardError::Collision(cell));
            }
        }
        for cell in ship.cells() {
            if let Some(i) = self.index(cell) {
                self.cells[i] = CellState::Occupied;
            }
            self.forbidden.insert(cell);
        }
        // The placement buffer only blocks future ships; it stays invisible.
        self.forbidden.extend(ship.buffer(self.size));
        self.ships.push(ship);
        Ok(())
    }

    /// Finish placement and open the board for firing.
    pub fn begin(&mut self) {
        self.fired_at.clear();
    }

    /// Resolve a shot at `target`.
    pub fn shoot(&mut self, target: Point) -> Result<ShotOutcome, BoardError> {
        let idx = self.index(target).ok_or(BoardError::OutOfBounds(target))?;
        if !self.fired_at.insert(target) {
            return Err(BoardError::AlreadyTargeted(target));
        }

        let Some(ship) = self.ships.iter_mut().find(|s| s.contains(target)) else {
            self.cells[idx] = CellState::Miss;
            trace!("shot at {} missed", target);
            return Ok(ShotOutcome::Miss);
        };
        ship.register_hit(target);
        self.cells[idx] = CellState::Hit;
        if !ship.is_sunk() {
            trace!("shot at {} hit", target);
            return Ok(ShotOutcome::Hit);
        }

        let ring = ship.buffer(self.size);
        self.sunk_count += 1;
        for p in ring {
            if let Some(i) = self.index(p) {
                self.cells[i] = CellState::Miss;
            }
        }
        trace!("shot at {} sank a ship ({} sunk)", target, self.sunk_count);
        Ok(ShotOutcome::Sunk)
    }

    /// Whether `sunk_count` has reached `threshold`.
    pub fn is_defeated(&self, threshold: usize) -> bool {
        self.sunk_count == threshold
    }
}
