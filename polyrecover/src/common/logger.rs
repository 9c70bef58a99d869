//! Logging subsystem.
//!
//! Records are written to stderr as JSON, one object per line, so that
//! stdout carries nothing but results. The minimum level is taken from the
//! `POLYRECOVER_LOG` environment variable and defaults to `warning`.
use std::{env, sync::Mutex};

use lazy_static::lazy_static;
use slog::{o, Drain, Level, LevelFilter};

/// Environment variable holding the minimum log level.
pub const LOG_LEVEL_ENV: &str = "POLYRECOVER_LOG";

lazy_static! {
    static ref LOGGER: slog::Logger = {
        let drain = Mutex::new(slog_json::Json::default(std::io::stderr())).map(slog::Fuse);
        let drain = LevelFilter::new(drain, level_from_env()).fuse();
        slog::Logger::root(drain, o!())
    };
}

/// Get the logger.
pub fn get_logger(module: &'static str) -> slog::Logger {
    LOGGER.new(o!("module" => module))
}

fn level_from_env() -> Level {
    env::var(LOG_LEVEL_ENV)
        .ok()
        .and_then(|v| parse_level(&v))
        .unwrap_or(Level::Warning)
}

fn parse_level(value: &str) -> Option<Level> {
    match value.trim().to_ascii_lowercase().as_str() {
        "critical" => Some(Level::Critical),
        "error" => Some(Level::Error),
        "warn" | "warning" => Some(Level::Warning),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}
