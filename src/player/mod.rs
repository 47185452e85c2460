//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - HumanPlayer: shots supplied by the caller (UI, network, script)
//! - RandomPlayer: uniform random targeting without repeats
//!
//! Both variants keep their board and fleet in a composed [`Seat`].

use rand::rngs::SmallRng;

use crate::core::{Coord, GameError, ShotResult, FLEET};

/// Interface implemented by different player types.
///
/// A Player is responsible for:
/// - Owning its board and fleet (through a [`Seat`])
/// - Placing its fleet when asked
/// - Proposing the next shot
/// - Handling feedback from its shots
pub trait Player: Send {
    fn seat(&self) -> &Seat;

    fn seat_mut(&mut self) -> &mut Seat;

    fn name(&self) -> &str {
        self.seat().name()
    }

    /// Propose the next coordinate to fire at.
    fn next_shot(&mut self, rng: &mut SmallRng) -> Result<Coord, GameError>;

    /// Place a fresh fleet, replacing any existing one.
    fn on_fleet_needed(&mut self, rng: &mut SmallRng) -> Result<(), GameError> {
        self.seat_mut().place_fleet_randomly(rng, &FLEET)
    }

    /// Inform the player of the result of a shot it fired.
    fn handle_shot_result(&mut self, _target: Coord, _result: ShotResult) {}

    /// `true` once every ship of this player is fully hit.
    fn has_lost(&self) -> bool {
        self.seat().has_lost()
    }
}

pub mod human;
pub mod random;
pub mod seat;

pub use human::HumanPlayer;
pub use random::RandomPlayer;
pub use seat::{Impact, Seat};
