use std::sync::{Arc, Mutex};

use broadside::prelude::*;
use broadside::{BOARD_COLS, BOARD_ROWS};
use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Play one headless match: the human side fires along a shuffled sweep of
/// the board, the computer side fires at random.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = BOARD_ROWS)]
    rows: usize,
    #[arg(long, default_value_t = BOARD_COLS)]
    cols: usize,
    #[arg(long, default_value = "Player")]
    name: String,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = GameConfig {
        rows: cli.rows,
        cols: cli.cols,
        seed: cli.seed,
        human_name: cli.name,
        ..GameConfig::default()
    };
    let mut game = Game::from_config(&config).map_err(|e| anyhow::anyhow!(e))?;

    let events: Arc<Mutex<Vec<GameEvent>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    game.subscribe(move |_, event| {
        if let Ok(mut buf) = sink.lock() {
            buf.push(*event);
        }
    });

    game.create_human_fleet_randomly()
        .map_err(|e| anyhow::anyhow!(e))?;
    game.start_match().map_err(|e| anyhow::anyhow!(e))?;

    let mut sweep_rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s.wrapping_add(1)),
        None => SmallRng::from_rng(&mut rand::rng()),
    };
    let sweep = Board::new(config.rows, config.cols);
    for target in sweep.shuffled_positions(&mut sweep_rng) {
        game.human_mut().aim(target);
    }

    let mut shots = [0usize; 2];
    while !game.is_finished() {
        let shooter = game.current_player();
        game.play_turn().map_err(|e| anyhow::anyhow!(e))?;
        shots[shooter as usize] += 1;
    }

    let winner = game.winner().map(|side| game.player(side).name().to_string());
    let events = events.lock().map(|e| e.clone()).unwrap_or_default();
    let sunk = |side: Side| {
        events
            .iter()
            .filter(|e| matches!(e, GameEvent::ShipDestroyed { side: s, .. } if *s == side))
            .count()
    };

    let result = json!({
        "winner": winner,
        "shots": {
            "human": shots[Side::Human as usize],
            "computer": shots[Side::Computer as usize],
        },
        "ships_sunk": {
            "human": sunk(Side::Human),
            "computer": sunk(Side::Computer),
        },
        "events": events.len(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
