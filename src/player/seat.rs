//! Bookkeeping shared by every player variant: name, own board and fleet.

use alloc::string::String;
use alloc::vec::Vec;
use rand::Rng;

use crate::core::{
    place_fleet, Board, CellState, Coord, GameError, Orientation, Ship, ShipId, ShipType,
    ShotResult,
};

/// What happened to a board when a shot landed on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Impact {
    pub target: Coord,
    pub result: ShotResult,
    /// The shot made a previously hidden ship visible.
    pub revealed: Option<ShipId>,
}

/// A player's own board and the ships placed on it.
#[derive(Debug)]
pub struct Seat {
    name: String,
    board: Board,
    fleet: Vec<Ship>,
}

impl Seat {
    pub fn new(name: impl Into<String>, board: Board) -> Self {
        Self {
            name: name.into(),
            board,
            fleet: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access, e.g. to subscribe to cell events.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn fleet(&self) -> &[Ship] {
        &self.fleet
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.fleet.get(id.index())
    }

    pub fn ship_mut(&mut self, id: ShipId) -> Option<&mut Ship> {
        self.fleet.get_mut(id.index())
    }

    /// Ships not yet fully hit.
    pub fn ships_afloat(&self) -> usize {
        self.fleet
            .iter()
            .filter(|s| !s.all_cells_hit(&self.board))
            .count()
    }

    /// `true` when every ship in the fleet is fully hit. An empty fleet has
    /// lost.
    pub fn has_lost(&self) -> bool {
        self.fleet.iter().all(|s| s.all_cells_hit(&self.board))
    }

    pub fn is_placement_free(&self, origin: Coord, size: usize, orientation: Orientation) -> bool {
        self.board.is_placement_free(origin, size, orientation)
    }

    /// Place one ship at a chosen origin and add it to the fleet.
    pub fn place_ship(
        &mut self,
        origin: Coord,
        ship_type: ShipType,
        orientation: Orientation,
    ) -> Result<ShipId, GameError> {
        let id = ShipId(self.fleet.len());
        let mut ship = Ship::new(id, ship_type);
        self.board.place_ship(origin, &mut ship, orientation)?;
        self.fleet.push(ship);
        Ok(id)
    }

    /// Destroy every ship and empty the fleet.
    pub fn destroy_fleet(&mut self) {
        for ship in self.fleet.iter_mut() {
            ship.destroy(&mut self.board);
        }
        self.fleet.clear();
    }

    /// Replace the fleet with a freshly randomised placement of `types`.
    pub fn place_fleet_randomly<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        types: &[ShipType],
    ) -> Result<(), GameError> {
        self.destroy_fleet();
        place_fleet(&mut self.board, &mut self.fleet, types, rng)?;
        log::info!("{} placed {} ships", self.name, self.fleet.len());
        Ok(())
    }

    /// Make every ship in the fleet visible.
    pub fn reveal_fleet(&mut self) {
        for ship in self.fleet.iter_mut() {
            ship.set_visible(true);
        }
    }

    /// Resolve an incoming shot at `target`.
    pub fn receive_shot(&mut self, target: Coord) -> Result<Impact, GameError> {
        let cell = self
            .board
            .cell_at_mut(target.row, target.col)
            .ok_or(GameError::OutOfBounds {
                row: target.row,
                col: target.col,
            })?;
        if cell.is_targeted() {
            return Err(GameError::AlreadyTargeted {
                row: target.row,
                col: target.col,
            });
        }
        let occupant = cell.occupant();
        cell.set_state(if occupant.is_some() {
            CellState::Hit
        } else {
            CellState::Miss
        });

        let miss = Impact {
            target,
            result: ShotResult::Miss,
            revealed: None,
        };
        let Some(id) = occupant else {
            return Ok(miss);
        };
        let Some(ship) = self.fleet.get_mut(id.index()) else {
            return Ok(Impact {
                result: ShotResult::Hit,
                ..miss
            });
        };

        let was_visible = ship.is_visible();
        if ship.is_fully_hit(&self.board) && ship.destroy(&mut self.board) {
            Ok(Impact {
                target,
                result: ShotResult::Sunk {
                    ship: id,
                    size: ship.size(),
                },
                revealed: (!was_visible && ship.is_visible()).then_some(id),
            })
        } else {
            Ok(Impact {
                result: ShotResult::Hit,
                ..miss
            })
        }
    }
}
