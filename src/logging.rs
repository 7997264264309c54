use log::{self, LevelFilter, Metadata, Record};
use std::env;

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{:<5} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Install the logger at the given level, or at the level named by the
/// `STERNHALMA_LOG` environment variable when `level` is `None` (default
/// `info`). Logs go to stderr so they do not interleave with the board view.
pub fn init_logging(level: Option<LevelFilter>) {
    let level = level
        .or_else(|| env::var("STERNHALMA_LOG").ok().and_then(|lvl| lvl.parse().ok()))
        .unwrap_or(LevelFilter::Info);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
