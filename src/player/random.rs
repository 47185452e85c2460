use alloc::string::String;
use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::core::{Board, Coord, GameError, ShotResult};

use super::{Player, Seat};

/// Autonomous player firing at uniformly random, never repeated coordinates.
#[derive(Debug)]
pub struct RandomPlayer {
    seat: Seat,
    untargeted: Vec<Coord>,
}

impl RandomPlayer {
    /// `target` is the board this player will fire upon; its full coordinate
    /// set becomes the initial target pool.
    pub fn new(name: impl Into<String>, board: Board, target: &Board) -> Self {
        Self {
            seat: Seat::new(name, board),
            untargeted: target.coords().collect(),
        }
    }

    /// Refill the pool with every coordinate of `target`.
    pub fn reset_targets(&mut self, target: &Board) {
        self.untargeted = target.coords().collect();
    }

    pub fn remaining_targets(&self) -> usize {
        self.untargeted.len()
    }

    fn forget(&mut self, target: Coord) {
        if let Some(idx) = self.untargeted.iter().position(|c| *c == target) {
            self.untargeted.swap_remove(idx);
        }
    }
}

impl Player for RandomPlayer {
    fn seat(&self) -> &Seat {
        &self.seat
    }

    fn seat_mut(&mut self) -> &mut Seat {
        &mut self.seat
    }

    fn next_shot(&mut self, rng: &mut SmallRng) -> Result<Coord, GameError> {
        if self.untargeted.is_empty() {
            return Err(GameError::TargetPoolExhausted);
        }
        let idx = rng.random_range(0..self.untargeted.len());
        Ok(self.untargeted.swap_remove(idx))
    }

    /// Shots fired on this player's behalf outside `next_shot` leave the pool
    /// too.
    fn handle_shot_result(&mut self, target: Coord, _result: ShotResult) {
        self.forget(target);
    }
}
