use std::env;

use log::{self, LevelFilter, Metadata, Record};

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", format_record(record));
        }
    }

    fn flush(&self) {}
}

/// `LEVEL [module] message`, with the crate prefix dropped so board, game and
/// player lines stand apart.
fn format_record(record: &Record) -> String {
    let target = record.target();
    let module = target.strip_prefix("sea_battle::").unwrap_or(target);
    format!("{:<5} [{}] {}", record.level(), module, record.args())
}

static LOGGER: StderrLogger = StderrLogger;

/// Initialize logging with a level taken from the `SEA_BATTLE_LOG` environment variable.
/// Defaults to `warn` so log lines do not interleave with the game board.
pub fn init_logging() {
    let level = env::var("SEA_BATTLE_LOG")
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Warn);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
