use alloc::string::{String, ToString};

use super::common::GameError;
use super::ship::ShipType;

pub const BOARD_ROWS: usize = 10;
pub const BOARD_COLS: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Upper bound on placement attempts during one fleet search.
pub const MAX_PLACEMENT_STEPS: usize = 100_000;

/// Runtime settings for one match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(default))]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    /// Fixed RNG seed for reproducible matches.
    pub seed: Option<u64>,
    pub human_name: String,
    pub computer_name: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: BOARD_ROWS,
            cols: BOARD_COLS,
            seed: None,
            human_name: "Player".to_string(),
            computer_name: "Computer".to_string(),
        }
    }
}

impl GameConfig {
    /// Reject boards the doctrinal fleet can never fit on.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GameError::InvalidConfig("board dimensions must be > 0"));
        }
        let longest = FLEET.iter().map(ShipType::length).max().unwrap_or(0);
        if longest > self.rows.max(self.cols) {
            return Err(GameError::InvalidConfig("longest ship does not fit on the board"));
        }
        let area = self
            .rows
            .checked_mul(self.cols)
            .ok_or(GameError::InvalidConfig("board is too large"))?;
        if TOTAL_SHIP_CELLS > area {
            return Err(GameError::InvalidConfig("fleet needs more cells than the board has"));
        }
        Ok(())
    }
}
