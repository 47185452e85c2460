//! Ship definitions and hit bookkeeping.

use alloc::vec::Vec;
use core::fmt;

use crate::core::board::Board;
use crate::core::cell::CellState;
use crate::core::common::Coord;
use crate::core::notify::{Notifier, SubscriptionId};

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// Index of a ship within its owner's fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipId(pub usize);

impl ShipId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Events emitted by a [`Ship`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipEvent {
    VisibilityChanged(bool),
    Destroyed,
}

/// A ship and the ordered run of board cells it was placed on.
///
/// The ship refers to its cells by coordinate; the board owns them.
pub struct Ship {
    id: ShipId,
    ship_type: ShipType,
    visible: bool,
    destroyed: bool,
    fully_hit: bool,
    cells: Vec<Coord>,
    notifier: Notifier<Ship, ShipEvent>,
}

impl Ship {
    /// Create an unplaced, hidden ship.
    pub fn new(id: ShipId, ship_type: ShipType) -> Self {
        Self {
            id,
            ship_type,
            visible: false,
            destroyed: false,
            fully_hit: false,
            cells: Vec::new(),
            notifier: Notifier::new(),
        }
    }

    pub fn id(&self) -> ShipId {
        self.id
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn size(&self) -> usize {
        self.ship_type.length()
    }

    /// Cells this ship occupies, in placement order.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn is_placed(&self) -> bool {
        !self.cells.is_empty()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub(crate) fn push_cell(&mut self, coord: Coord) {
        self.cells.push(coord);
    }

    /// Pure check: every associated cell is `Hit` on `board`.
    pub fn all_cells_hit(&self, board: &Board) -> bool {
        self.fully_hit
            || self.cells.iter().all(|c| {
                board
                    .cell_at(c.row, c.col)
                    .map_or(false, |cell| cell.state() == CellState::Hit)
            })
    }

    /// Check whether the ship is fully hit. The first time this observes a
    /// full hit the result is latched and the ship becomes visible.
    pub fn is_fully_hit(&mut self, board: &Board) -> bool {
        if self.fully_hit {
            return true;
        }
        if !self.all_cells_hit(board) {
            return false;
        }
        self.fully_hit = true;
        self.set_visible(true);
        true
    }

    /// Change visibility. Setting the current value again is a no-op.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible == visible {
            return;
        }
        self.visible = visible;
        self.notifier
            .publish(self, &ShipEvent::VisibilityChanged(visible));
    }

    /// Detach the ship from its cells and mark it destroyed.
    ///
    /// One-shot: returns `false` and does nothing if already destroyed.
    pub fn destroy(&mut self, board: &mut Board) -> bool {
        if self.destroyed {
            return false;
        }
        self.detach(board);
        self.destroyed = true;
        self.notifier.publish(self, &ShipEvent::Destroyed);
        true
    }

    /// Clear this ship's back-reference on every associated cell.
    pub(crate) fn detach(&self, board: &mut Board) {
        for coord in self.cells.iter() {
            if let Some(cell) = board.cell_at_mut(coord.row, coord.col) {
                if cell.occupant() == Some(self.id) {
                    cell.set_occupant(None);
                }
            }
        }
    }

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: Fn(&Ship, &ShipEvent) + Send + 'static,
    {
        self.notifier.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ id: {}, name: \"{}\", cells: {:?}, visible: {}, destroyed: {} }}",
            self.id.0,
            self.ship_type.name(),
            self.cells,
            self.visible,
            self.destroyed,
        )
    }
}
