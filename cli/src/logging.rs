#![deny(missing_docs)]

//! # Logging
//!
//! Installs `env_logger` with the one-line `[LEVEL] message` format used by
//! the scaffolding hooks. Success lines logged to [`OK_TARGET`] render as `[OK]`.

use env_logger::{Builder, Env};
use log::{Level, Record};
use std::io::Write;
use stubgen_core::OK_TARGET;

/// Initializes the global logger. `RUST_LOG` overrides the default `info` filter.
pub fn init() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{}] {}", label(record), record.args()))
        .init();
}

fn label(record: &Record<'_>) -> &'static str {
    if record.target() == OK_TARGET {
        return "OK";
    }
    match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
