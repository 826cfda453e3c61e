use std::io::{self, BufRead, StdinLock, Stdout, Write};

use thiserror::Error;

use super::{Player, PlayerError};
use crate::common::{BoardError, ShotOutcome};
use crate::point::Point;

/// Why a line typed by the player could not be turned into a target.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedInput {
    #[error("enter exactly 2 coordinates, got {0}")]
    WrongTokenCount(usize),
    #[error("'{0}' is not a whole number")]
    NotAnInteger(String),
    #[error("coordinates start at 1")]
    Zero,
    #[error("'{0}' is far too large for a coordinate")]
    TooLarge(String),
}

/// Format a point the way the player types it: 1-indexed row and column.
pub fn coord_to_string(p: Point) -> String {
    format!("{} {}", p.x() + 1, p.y() + 1)
}

/// Parse `"<row> <column>"` with 1-indexed values into a 0-indexed point.
///
/// Bounds are not checked here; the board reports points that are off the grid.
pub fn parse_target(line: &str) -> Result<Point, MalformedInput> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [x, y] = tokens[..] else {
        return Err(MalformedInput::WrongTokenCount(tokens.len()));
    };
    let parse = |tok: &str| -> Result<usize, MalformedInput> {
        if !tok.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MalformedInput::NotAnInteger(tok.to_string()));
        }
        // Only digits remain, so a failed parse means overflow.
        let n: usize = tok
            .parse()
            .map_err(|_| MalformedInput::TooLarge(tok.to_string()))?;
        n.checked_sub(1).ok_or(MalformedInput::Zero)
    };
    Ok(Point::new(parse(x)?, parse(y)?))
}

/// Human player typing targets on a line-based terminal.
pub struct CliPlayer<R = StdinLock<'static>, W = Stdout> {
    input: R,
    output: W,
}

impl CliPlayer {
    /// Player reading from stdin and writing to stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the player and hand back its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, msg: &str) {
        // Feedback is best effort; a broken terminal surfaces on the next read.
        let _ = writeln!(self.output, "{}", msg);
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn next_target(&mut self) -> Result<Point, PlayerError> {
        let mut line = String::new();
        loop {
            write!(self.output, "Your move (row column): ")?;
            self.output.flush()?;
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Err(PlayerError::InputClosed);
            }
            match parse_target(&line) {
                Ok(target) => return Ok(target),
                Err(e) => writeln!(self.output, "✗ {}", e)?,
            }
        }
    }

    fn handle_shot_result(&mut self, target: Point, outcome: ShotOutcome) {
        let at = coord_to_string(target);
        match outcome {
            ShotOutcome::Hit => self.say(&format!("🎯 Hit at {}! Fire again.", at)),
            ShotOutcome::Sunk => self.say(&format!("💥 Sunk an enemy ship at {}! Fire again.", at)),
            ShotOutcome::Miss => self.say(&format!("💧 Miss at {}.", at)),
        }
    }

    fn handle_rejected_shot(&mut self, _target: Point, error: &BoardError) {
        match error {
            BoardError::OutOfBounds(_) => self.say("✗ That shot is off the board!"),
            BoardError::AlreadyTargeted(_) => self.say("✗ You already fired at that cell!"),
            other => self.say(&format!("✗ {}", other)),
        }
    }

    fn handle_opponent_shot(&mut self, target: Point, outcome: ShotOutcome) {
        let at = coord_to_string(target);
        match outcome {
            ShotOutcome::Hit => self.say(&format!("⚠️  Enemy hit your ship at {}", at)),
            ShotOutcome::Sunk => self.say(&format!("💀 Enemy sank your ship at {}", at)),
            ShotOutcome::Miss => self.say(&format!("✓ Enemy missed at {}", at)),
        }
    }
}
