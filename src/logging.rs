//! Logger setup for binaries and tests that want to see the graph's `log` records.
//!
//! The level is taken from `RUST_LOG` unless overridden.
use env_logger::Builder;
use log::{LevelFilter, SetLoggerError};
use std::io::Write;

fn graph_builder() -> Builder {
    let mut builder = Builder::from_default_env();
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{}] - {}",
            record.level(),
            record.module_path().unwrap_or("weighted_graph"),
            record.args()
        )
    });
    builder
}

pub fn build_logger_for_level(level: LevelFilter) {
    graph_builder().filter(None, level).init();
}

pub fn build_logger() {
    graph_builder().init();
}

/// Like [`build_logger_for_level`], but returns an error instead of panicking when a logger
/// is already installed. Useful from tests, where several may race to initialise.
pub fn try_build_logger_for_level(level: LevelFilter) -> Result<(), SetLoggerError> {
    graph_builder().filter(None, level).try_init()
}
