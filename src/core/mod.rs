//! Core battleship engine (no_std compatible)
//!
//! Cells, ships, boards, fleet placement and the notification hub they share.
//! Only `alloc`, `rand` and `log` are required, so the engine can be embedded
//! wherever a presentation layer lives.

pub mod board;
pub mod cell;
pub mod common;
pub mod config;
pub mod notify;
pub mod placement;
pub mod ship;

// Re-export commonly used types
pub use board::{Board, ShuffledPositions};
pub use cell::{Cell, CellEvent, CellState};
pub use common::{Coord, GameError, Orientation, ShotResult};
pub use config::*;
pub use notify::{Notifier, SubscriptionId};
pub use placement::place_fleet;
pub use ship::{Ship, ShipEvent, ShipId, ShipType};
