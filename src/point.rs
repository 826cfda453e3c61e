//! Board coordinates.

use core::fmt;

/// A cell on the board. `x` is the row and `y` the column, both 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    x: usize,
    y: usize,
}

impl Point {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Row index.
    pub const fn x(&self) -> usize {
        self.x
    }

    /// Column index.
    pub const fn y(&self) -> usize {
        self.y
    }

    /// Whether this point lies inside a `size`×`size` board.
    pub fn in_bounds(&self, size: usize) -> bool {
        self.x < size && self.y < size
    }

    /// The up to 8 surrounding points that fit on a `size`×`size` board.
    pub fn neighbors(&self, size: usize) -> impl Iterator<Item = Point> + '_ {
        let rows = self.x.saturating_sub(1)..=self.x.saturating_add(1);
        rows.flat_map(move |x| {
            (self.y.saturating_sub(1)..=self.y.saturating_add(1)).map(move |y| Point::new(x, y))
        })
        .filter(move |p| p != self && p.in_bounds(size))
    }

    /// Chebyshev (king-move) distance between two points.
    pub fn chebyshev(&self, other: &Point) -> usize {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

impl From<(usize, usize)> for Point {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (usize, usize) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
