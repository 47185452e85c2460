use alloc::collections::VecDeque;
use alloc::string::String;
use rand::rngs::SmallRng;

use crate::core::{Board, Coord, GameError, FLEET};

use super::{Player, Seat};

/// Player whose shots come from outside the engine.
///
/// The caller either fires directly through the game or queues coordinates
/// with [`HumanPlayer::aim`] for [`Player::next_shot`] to hand out.
#[derive(Debug)]
pub struct HumanPlayer {
    seat: Seat,
    queued: VecDeque<Coord>,
}

impl HumanPlayer {
    pub fn new(name: impl Into<String>, board: Board) -> Self {
        Self {
            seat: Seat::new(name, board),
            queued: VecDeque::new(),
        }
    }

    /// Queue a shot. No validation happens until it is fired.
    pub fn aim(&mut self, target: Coord) {
        self.queued.push_back(target);
    }

    pub fn queued(&self) -> usize {
        self.queued.len()
    }
}

impl Player for HumanPlayer {
    fn seat(&self) -> &Seat {
        &self.seat
    }

    fn seat_mut(&mut self) -> &mut Seat {
        &mut self.seat
    }

    fn next_shot(&mut self, _rng: &mut SmallRng) -> Result<Coord, GameError> {
        self.queued.pop_front().ok_or(GameError::NoShotQueued)
    }

    /// Own ships are always shown to their owner.
    fn on_fleet_needed(&mut self, rng: &mut SmallRng) -> Result<(), GameError> {
        self.seat.place_fleet_randomly(rng, &FLEET)?;
        self.seat.reveal_fleet();
        Ok(())
    }
}
