//! Ship geometry and damage tracking.

use crate::point::Point;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Extends along the row, increasing `y`.
    Horizontal,
    /// Extends down the column, increasing `x`.
    Vertical,
}

/// A straight ship anchored at its bow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    bow: Point,
    length: usize,
    orientation: Orientation,
    hit_points: usize,
}

impl Ship {
    /// Create an undamaged ship. A zero-length ship is refused by [`Board::place`](crate::Board::place).
    pub fn new(bow: Point, length: usize, orientation: Orientation) -> Self {
        Self {
            bow,
            length,
            orientation,
            hit_points: length,
        }
    }

    pub fn bow(&self) -> Point {
        self.bow
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Intact cells left.
    pub fn hit_points(&self) -> usize {
        self.hit_points
    }

    pub fn is_sunk(&self) -> bool {
        self.hit_points == 0
    }

    /// Cells covered by the ship, starting at the bow. Cells may run past the edge of
    /// the board; the board decides whether that is allowed.
    pub fn cells(&self) -> impl Iterator<Item = Point> {
        let Ship {
            bow, orientation, ..
        } = *self;
        (0..self.length).map(move |i| match orientation {
            Orientation::Horizontal => Point::new(bow.x(), bow.y().saturating_add(i)),
            Orientation::Vertical => Point::new(bow.x().saturating_add(i), bow.y()),
        })
    }

    pub fn contains(&self, p: Point) -> bool {
        self.cells().any(|c| c == p)
    }

    /// In-bounds cells touching the ship (including diagonals) that the ship itself
    /// does not cover.
    pub fn buffer(&self, size: usize) -> Vec<Point> {
        let mut ring: Vec<Point> = self
            .cells()
            .flat_map(|c| c.neighbors(size).collect::<Vec<_>>())
            .filter(|p| !self.contains(*p))
            .collect();
        ring.sort_unstable();
        ring.dedup();
        ring
    }

    /// Register a shot at `p`. Returns `true` if it struck this ship.
    pub fn register_hit(&mut self, p: Point) -> bool {
        if self.contains(p) {
            self.hit_points = self.hit_points.saturating_sub(1);
            true
        } else {
            false
        }
    }
}
