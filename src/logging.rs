#![cfg(feature = "std")]

use log::{LevelFilter, Log, Metadata, Record};
use std::io::Write;

const LEVEL_VAR: &str = "MINESWEEPER_LOG";

/// Writes records to stderr; stdout belongs to the board.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let target = record.target().trim_start_matches("minesweeper::");
        let _ = writeln!(
            std::io::stderr().lock(),
            "{:<5} [{}] {}",
            record.level(),
            target,
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Parse a level name such as `debug` or `off`; unknown names give `None`.
pub(crate) fn level_from(value: Option<&str>) -> Option<LevelFilter> {
    value.and_then(|v| v.trim().parse().ok())
}

/// Install the stderr logger, level taken from `MINESWEEPER_LOG` (default `warn`).
/// Calling it again is harmless.
pub fn init_logging() {
    let level = level_from(std::env::var(LEVEL_VAR).ok().as_deref()).unwrap_or(LevelFilter::Warn);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from() {
        assert_eq!(level_from(Some("debug")), Some(LevelFilter::Debug));
        assert_eq!(level_from(Some(" OFF ")), Some(LevelFilter::Off));
        assert_eq!(level_from(Some("loud")), None);
        assert_eq!(level_from(None), None);
    }

    #[test]
    fn test_init_twice() {
        init_logging();
        init_logging();
        assert!(log::max_level() <= LevelFilter::Trace);
    }
}
