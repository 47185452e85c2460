//! Randomised fleet placement.
//!
//! Ships are seated in the order given. For each ship a fresh shuffled list of
//! origins is walked; every origin is tried vertically first and horizontally
//! only if that fails. When a later ship finds no slot the search backs up and
//! moves the previous ship to its next candidate, so a fleet that fits at all
//! is always placed, subject to `MAX_PLACEMENT_STEPS`.

use alloc::vec::Vec;
use rand::Rng;

use crate::core::board::Board;
use crate::core::common::{Coord, GameError, Orientation};
use crate::core::config::MAX_PLACEMENT_STEPS;
use crate::core::ship::{Ship, ShipId, ShipType};

/// Place every entry of `types` on `board`, appending the ships to `fleet`.
///
/// `fleet` must not hold ships that still occupy `board` cells under the ids
/// about to be issued; callers destroy the previous fleet first. On failure
/// the board and `fleet` are left as they were on entry.
pub fn place_fleet<R: Rng + ?Sized>(
    board: &mut Board,
    fleet: &mut Vec<Ship>,
    types: &[ShipType],
    rng: &mut R,
) -> Result<(), GameError> {
    let base = fleet.len();
    let mut budget = MAX_PLACEMENT_STEPS;
    match place_from(board, fleet, types, rng, &mut budget) {
        Ok(()) => Ok(()),
        Err(size) => {
            log::warn!("fleet placement failed on a ship of size {}", size);
            while fleet.len() > base {
                if let Some(ship) = fleet.pop() {
                    ship.detach(board);
                }
            }
            Err(GameError::FleetUnplaceable { size })
        }
    }
}

/// Depth-first search over `types`; on failure returns the size of the first
/// ship that could not be seated.
fn place_from<R: Rng + ?Sized>(
    board: &mut Board,
    fleet: &mut Vec<Ship>,
    types: &[ShipType],
    rng: &mut R,
    budget: &mut usize,
) -> Result<(), usize> {
    let Some((&ship_type, rest)) = types.split_first() else {
        return Ok(());
    };
    let candidates: Vec<Coord> = board.shuffled_positions(rng).collect();
    let mut deepest_failure = ship_type.length();

    for origin in candidates {
        for orientation in [Orientation::Vertical, Orientation::Horizontal] {
            if *budget == 0 {
                return Err(deepest_failure);
            }
            *budget -= 1;

            let mut ship = Ship::new(ShipId(fleet.len()), ship_type);
            if board.place_ship(origin, &mut ship, orientation).is_err() {
                continue;
            }
            log::debug!(
                "placed {} at {} {:?}",
                ship_type.name(),
                origin,
                orientation
            );
            fleet.push(ship);
            match place_from(board, fleet, rest, rng, budget) {
                Ok(()) => return Ok(()),
                Err(size) => {
                    deepest_failure = size;
                    if let Some(ship) = fleet.pop() {
                        ship.detach(board);
                    }
                }
            }
        }
    }
    Err(deepest_failure)
}
