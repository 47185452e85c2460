//! Common types for the engine: coordinates, orientation, shot outcomes and
//! the error enum every fallible operation returns.

use crate::core::ship::ShipId;

/// Position on a board, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Cell `offset` steps away from this one along `orientation`.
    pub fn step(self, orientation: Orientation, offset: usize) -> Self {
        match orientation {
            Orientation::Horizontal => Coord::new(self.row, self.col + offset),
            Orientation::Vertical => Coord::new(self.row + offset, self.col),
        }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord::new(row, col)
    }
}

impl core::fmt::Display for Coord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Result of a shot that was applied to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// Shot landed on open water.
    Miss,
    /// Shot hit a ship that still has untouched segments.
    Hit,
    /// Shot hit the last intact segment of a ship.
    Sunk { ship: ShipId, size: usize },
}

impl ShotResult {
    /// `true` for both `Hit` and `Sunk`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotResult::Miss)
    }
}

/// Errors returned by board, player and game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Coordinate lies outside the board.
    OutOfBounds { row: usize, col: usize },
    /// Ship run leaves the board or overlaps another ship.
    PlacementRejected,
    /// Cell was already resolved as a hit or a miss.
    AlreadyTargeted { row: usize, col: usize },
    /// Command is only valid before the match starts.
    MatchAlreadyStarted,
    /// Command is only valid once the match has started.
    MatchNotStarted,
    /// A winner already exists.
    MatchFinished,
    /// Autonomous player ran out of coordinates to shoot at.
    TargetPoolExhausted,
    /// Externally-driven player has no queued shot.
    NoShotQueued,
    /// No arrangement of the fleet fits the board; carries the first ship size
    /// the search could not seat.
    FleetUnplaceable { size: usize },
    /// Configuration rejected by validation.
    InvalidConfig(&'static str),
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::OutOfBounds { row, col } => {
                write!(f, "Coordinate ({}, {}) is outside the board", row, col)
            }
            GameError::PlacementRejected => write!(f, "Ship placement overlaps or leaves the board"),
            GameError::AlreadyTargeted { row, col } => {
                write!(f, "Cell ({}, {}) has already been targeted", row, col)
            }
            GameError::MatchAlreadyStarted => write!(f, "Match has already started"),
            GameError::MatchNotStarted => write!(f, "Match has not started yet"),
            GameError::MatchFinished => write!(f, "Match is already over"),
            GameError::TargetPoolExhausted => write!(f, "No untargeted coordinates remain"),
            GameError::NoShotQueued => write!(f, "No shot has been queued"),
            GameError::FleetUnplaceable { size } => {
                write!(f, "Unable to place ship of size {}", size)
            }
            GameError::InvalidConfig(reason) => write!(f, "Invalid configuration: {}", reason),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
