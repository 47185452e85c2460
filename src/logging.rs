#![cfg(feature = "std")]

use std::env;
use std::io::{self, Write};

use log::{LevelFilter, Log, Metadata, Record};

const LEVEL_VAR: &str = "BROADSIDE_LOG";

/// Writes `LEVEL target: message` lines to stderr, keeping stdout free for
/// machine-readable output such as the simulator's JSON summary.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut err = io::stderr().lock();
        let _ = writeln!(
            err,
            "{:<5} {}: {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Level named by `BROADSIDE_LOG` (`off`, `error` .. `trace`), `info` when
/// unset or unparsable.
pub fn level_from_env() -> LevelFilter {
    env::var(LEVEL_VAR)
        .ok()
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger at the level from [`level_from_env`].
///
/// Later calls only adjust the maximum level.
pub fn init_logging() {
    let level = level_from_env();
    if log::set_logger(&LOGGER).is_err() {
        log::debug!("logger already installed");
    }
    log::set_max_level(level);
}
