//! Rules engine and targeting AI for a two-player grid-based naval combat
//! game.
//!
//! The crate tracks the player's own board and an inferred model of the
//! opponent's board, resolves shots with adjacency-based sinking detection,
//! and produces a firing sequence from a staged strategy engine: a
//! region-tiled sparse search sized to the largest remaining ship class, a
//! focused hunt once a ship is damaged, and a uniform-random fallback for
//! the one-deckers.

mod common;
mod config;
mod field;
mod game;
mod geometry;
mod logging;
mod position;
mod strategy;

pub use common::{Cell, GameError, ShotOutcome};
pub use config::{DEFAULT_SHIPS, MAX_BOARD_SIZE};
pub use field::Field;
pub use game::{Game, GameOptions};
pub use geometry::{to_index, to_position, Point, Region};
pub use logging::init_logging;
pub use position::{format_position, parse_position, parse_position_with};
pub use strategy::{
    random_unknown_point, tile_regions, HuntStrategy, SearchStrategy, StrategyKind,
};
