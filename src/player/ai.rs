use log::trace;
use rand::rngs::SmallRng;
use rand::Rng;

use super::{Player, PlayerError};
use crate::point::Point;

/// Computer opponent that fires at a uniformly random point every turn.
///
/// It keeps no memory of earlier shots, so it can pick a point it already fired
/// at; the board refuses those and the engine simply asks again.
pub struct AiPlayer<R = SmallRng> {
    size: usize,
    rng: R,
}

impl<R: Rng> AiPlayer<R> {
    pub fn new(size: usize, rng: R) -> Self {
        Self { size, rng }
    }
}

impl<R: Rng> Player for AiPlayer<R> {
    fn next_target(&mut self) -> Result<Point, PlayerError> {
        let target = Point::new(
            self.rng.random_range(0..self.size),
            self.rng.random_range(0..self.size),
        );
        trace!("ai picked {}", target);
        Ok(target)
    }
}
