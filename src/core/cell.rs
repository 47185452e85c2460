//! Single grid square.

use crate::core::common::Coord;
use crate::core::notify::{Notifier, SubscriptionId};
use crate::core::ship::ShipId;

/// Firing state of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Not fired upon yet.
    #[default]
    Empty,
    Hit,
    Miss,
}

/// Events emitted by a [`Cell`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellEvent {
    StateChanged(CellState),
}

/// A board square: fixed position, firing state and the ship sitting on it.
///
/// The occupant is a handle into the owning player's fleet, never an owner.
/// Cell does no legality checking; board and game enforce the rules.
#[derive(Debug)]
pub struct Cell {
    coord: Coord,
    state: CellState,
    occupant: Option<ShipId>,
    notifier: Notifier<Cell, CellEvent>,
}

impl Cell {
    pub fn new(coord: Coord) -> Self {
        Self {
            coord,
            state: CellState::Empty,
            occupant: None,
            notifier: Notifier::new(),
        }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn row(&self) -> usize {
        self.coord.row
    }

    pub fn col(&self) -> usize {
        self.coord.col
    }

    pub fn state(&self) -> CellState {
        self.state
    }

    /// `true` once the cell has been resolved as either hit or miss.
    pub fn is_targeted(&self) -> bool {
        self.state != CellState::Empty
    }

    /// Update the firing state and notify subscribers.
    pub fn set_state(&mut self, state: CellState) {
        self.state = state;
        self.notifier.publish(self, &CellEvent::StateChanged(state));
    }

    pub fn has_occupant(&self) -> bool {
        self.occupant.is_some()
    }

    pub fn occupant(&self) -> Option<ShipId> {
        self.occupant
    }

    pub fn set_occupant(&mut self, occupant: Option<ShipId>) {
        self.occupant = occupant;
    }

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: Fn(&Cell, &CellEvent) + Send + 'static,
    {
        self.notifier.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }
}
