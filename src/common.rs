//! Shared core types: cell states, shot outcomes, and the crate error type.

use core::fmt;

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Untouched water; on the inferred enemy board this means "unknown".
    Empty,
    /// An intact ship segment.
    Ship,
    /// Adjacency buffer around a placed ship. Only exists while ships are
    /// being placed; cleared back to `Empty` once placement finishes.
    Blocked,
    /// A ship segment that has been shot.
    Hit,
    /// A shot that found only water.
    Miss,
}

/// Outcome of resolving one shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// A ship segment was struck but the ship still has intact segments.
    Hit,
    /// The struck ship has no intact segments left.
    Kill,
    /// Open water.
    Miss,
}

/// Errors returned by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Coordinate outside `1..=size`. Recoverable: the shot request was
    /// invalid and game state is untouched.
    OutOfRange { x: usize, y: usize },
    /// Position text could not be converted to a coordinate.
    Parse(String),
    /// Invalid game configuration, reported at game start.
    Config(&'static str),
    /// The targeting machinery ran dry. Indicates broken strategy hand-off
    /// in the surrounding turn loop, not a regular game event.
    StrategyExhausted,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::OutOfRange { x, y } => write!(f, "wrong position: {} {}", x, y),
            GameError::Parse(text) => write!(f, "can't parse position: {}", text),
            GameError::Config(reason) => write!(f, "invalid configuration: {}", reason),
            GameError::StrategyExhausted => write!(f, "no shootable points left"),
        }
    }
}

impl std::error::Error for GameError {}
