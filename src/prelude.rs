//! Commonly used types and utilities for ease of import.

pub use crate::{
    Board, Coord, Game, GameConfig, GameError, GameEvent, HumanPlayer, Orientation, Player,
    RandomPlayer, ShotResult, Side,
};

#[cfg(feature = "std")]
pub use crate::init_logging;
