//! Match orchestration: turn order, firing and victory detection.

use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::core::{
    Board, Cell, CellState, Coord, GameConfig, GameError, Notifier, Ship, ShipId, ShotResult,
    SubscriptionId,
};
use crate::player::{HumanPlayer, Impact, Player, RandomPlayer};

/// Which of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// Externally-driven player.
    Human,
    /// Autonomous random player.
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

/// Derived phase of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Finished { winner: Side },
}

/// Events published on the game-level stream. `side` names the player whose
/// board or fleet changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    HumanFleetCreated,
    AutonomousFleetCreated,
    MatchStarted,
    CellStateChanged {
        side: Side,
        row: usize,
        col: usize,
        state: CellState,
    },
    ShipVisibilityChanged {
        side: Side,
        ship: ShipId,
        visible: bool,
    },
    ShipDestroyed {
        side: Side,
        ship: ShipId,
    },
}

/// A match between an externally-driven player and a random one.
///
/// Calls must be serialised: observers only get `&Game` and must not try to
/// drive the match from inside a handler.
pub struct Game {
    human: HumanPlayer,
    computer: RandomPlayer,
    current: Side,
    started: bool,
    rng: SmallRng,
    notifier: Notifier<Game, GameEvent>,
}

impl Game {
    /// Create a match; the human player fires first.
    pub fn new(human: HumanPlayer, computer: RandomPlayer, rng: SmallRng) -> Self {
        Self {
            human,
            computer,
            current: Side::Human,
            started: false,
            rng,
            notifier: Notifier::new(),
        }
    }

    /// Build both players and their boards from `config`.
    pub fn from_config(config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let human = HumanPlayer::new(
            config.human_name.as_str(),
            Board::new(config.rows, config.cols),
        );
        let computer = RandomPlayer::new(
            config.computer_name.as_str(),
            Board::new(config.rows, config.cols),
            human.seat().board(),
        );
        Ok(Self::new(human, computer, seeded_rng(config.seed)))
    }

    pub fn player(&self, side: Side) -> &dyn Player {
        match side {
            Side::Human => &self.human,
            Side::Computer => &self.computer,
        }
    }

    pub fn player_mut(&mut self, side: Side) -> &mut dyn Player {
        match side {
            Side::Human => &mut self.human,
            Side::Computer => &mut self.computer,
        }
    }

    pub fn human(&self) -> &HumanPlayer {
        &self.human
    }

    pub fn human_mut(&mut self) -> &mut HumanPlayer {
        &mut self.human
    }

    pub fn computer(&self) -> &RandomPlayer {
        &self.computer
    }

    pub fn computer_mut(&mut self) -> &mut RandomPlayer {
        &mut self.computer
    }

    pub fn current_player(&self) -> Side {
        self.current
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Cell of `side`'s board at (`row`, `col`), `None` when out of range.
    pub fn cell_at(&self, side: Side, row: usize, col: usize) -> Option<&Cell> {
        self.player(side).seat().board().cell_at(row, col)
    }

    /// Winning side, if any. Nobody wins before the match starts.
    pub fn winner(&self) -> Option<Side> {
        if !self.started {
            return None;
        }
        if self.computer.has_lost() {
            Some(Side::Human)
        } else if self.human.has_lost() {
            Some(Side::Computer)
        } else {
            None
        }
    }

    pub fn is_finished(&self) -> bool {
        self.winner().is_some()
    }

    pub fn status(&self) -> GameStatus {
        match (self.started, self.winner()) {
            (false, _) => GameStatus::NotStarted,
            (true, None) => GameStatus::InProgress,
            (true, Some(winner)) => GameStatus::Finished { winner },
        }
    }

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: Fn(&Game, &GameEvent) + Send + 'static,
    {
        self.notifier.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Randomly (re)place the human fleet. Only allowed before the match.
    ///
    /// Observers get `ShipDestroyed` for every ship of a replaced fleet, then
    /// `ShipVisibilityChanged` for each new ship, then `HumanFleetCreated`.
    pub fn create_human_fleet_randomly(&mut self) -> Result<(), GameError> {
        if self.started {
            log::warn!("fleet placement requested after the match started");
            return Err(GameError::MatchAlreadyStarted);
        }
        let replaced: Vec<ShipId> = self
            .human
            .seat()
            .fleet()
            .iter()
            .filter(|s| !s.is_destroyed())
            .map(Ship::id)
            .collect();
        let placed = self.human.on_fleet_needed(&mut self.rng);
        for ship in replaced {
            self.publish(GameEvent::ShipDestroyed {
                side: Side::Human,
                ship,
            });
        }
        placed?;

        let revealed: Vec<ShipId> = self
            .human
            .seat()
            .fleet()
            .iter()
            .filter(|s| s.is_visible())
            .map(Ship::id)
            .collect();
        for ship in revealed {
            self.publish(GameEvent::ShipVisibilityChanged {
                side: Side::Human,
                ship,
                visible: true,
            });
        }
        self.publish(GameEvent::HumanFleetCreated);
        Ok(())
    }

    /// Start the match, placing the computer fleet if it has none.
    pub fn start_match(&mut self) -> Result<(), GameError> {
        if self.started {
            log::warn!("match start requested twice");
            return Err(GameError::MatchAlreadyStarted);
        }
        if self.computer.seat().fleet().is_empty() {
            self.computer.on_fleet_needed(&mut self.rng)?;
            self.publish(GameEvent::AutonomousFleetCreated);
        }
        self.started = true;
        log::info!(
            "match started: {} vs {}",
            self.human.name(),
            self.computer.name()
        );
        self.publish(GameEvent::MatchStarted);
        Ok(())
    }

    /// Current player fires at (`row`, `col`) on the opponent's board.
    ///
    /// On success the turn passes to the other player, including on the shot
    /// that ends the match. Errors leave every piece of state unchanged.
    pub fn fire(&mut self, row: usize, col: usize) -> Result<ShotResult, GameError> {
        if !self.started {
            return Err(GameError::MatchNotStarted);
        }
        if self.is_finished() {
            return Err(GameError::MatchFinished);
        }
        let shooter = self.current;
        let target_side = shooter.opponent();
        let target = Coord::new(row, col);
        let impact = self
            .player_mut(target_side)
            .seat_mut()
            .receive_shot(target)?;

        self.player_mut(shooter)
            .handle_shot_result(target, impact.result);
        self.current = target_side;
        log::debug!(
            "{} fired at {}: {:?}",
            self.player(shooter).name(),
            target,
            impact.result
        );
        self.announce(target_side, &impact);

        if let Some(winner) = self.winner() {
            log::info!("{} wins", self.player(winner).name());
        }
        Ok(impact.result)
    }

    /// Ask the current player for a shot and fire it.
    pub fn play_turn(&mut self) -> Result<(Coord, ShotResult), GameError> {
        let target = match self.current {
            Side::Human => self.human.next_shot(&mut self.rng),
            Side::Computer => self.computer.next_shot(&mut self.rng),
        }
        .inspect_err(|e| {
            if *e == GameError::TargetPoolExhausted {
                log::error!("{} has no targets left", self.player(self.current).name());
            }
        })?;
        let result = self.fire(target.row, target.col)?;
        Ok((target, result))
    }

    fn announce(&self, side: Side, impact: &Impact) {
        let state = match impact.result {
            ShotResult::Miss => CellState::Miss,
            ShotResult::Hit | ShotResult::Sunk { .. } => CellState::Hit,
        };
        self.publish(GameEvent::CellStateChanged {
            side,
            row: impact.target.row,
            col: impact.target.col,
            state,
        });
        if let Some(ship) = impact.revealed {
            self.publish(GameEvent::ShipVisibilityChanged {
                side,
                ship,
                visible: true,
            });
        }
        if let ShotResult::Sunk { ship, size } = impact.result {
            log::info!("{}'s ship of size {} was sunk", self.player(side).name(), size);
            self.publish(GameEvent::ShipDestroyed { side, ship });
        }
    }

    fn publish(&self, event: GameEvent) {
        self.notifier.publish(self, &event);
    }
}

#[cfg(feature = "std")]
fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(not(feature = "std"))]
fn seeded_rng(seed: Option<u64>) -> SmallRng {
    SmallRng::seed_from_u64(seed.unwrap_or_default())
}
