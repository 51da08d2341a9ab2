// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

//! Optional tracing of the marshaling layer
//!
//! `CRYPTOKI_ABI_TRACE` selects where messages go: `stdout`, or any other
//! value as a file name. When unset nothing is initialized. The level is
//! taken from `CRYPTOKI_ABI_TRACE_LEVEL` (off, error, warn, info, debug,
//! trace) and defaults to error; an unrecognized level enables everything.
//! Failures to set up the logger are silently ignored, tracing is simply
//! not available then.

use std::fs::File;
use std::sync::Once;

use simplelog::{Config, LevelFilter, SimpleLogger, WriteLogger};

const ENV_TRACE: &str = "CRYPTOKI_ABI_TRACE";
const ENV_TRACE_LEVEL: &str = "CRYPTOKI_ABI_TRACE_LEVEL";

static INIT: Once = Once::new();

fn parse_level(level: Option<&str>) -> LevelFilter {
    match level {
        None => LevelFilter::Error,
        Some("off") => LevelFilter::Off,
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        Some(_) => LevelFilter::Trace,
    }
}

fn install(target: &str, level: LevelFilter) {
    let _ = match target {
        "stdout" => SimpleLogger::init(level, Config::default()),
        file_name => match File::create(file_name) {
            Ok(file) => WriteLogger::init(level, Config::default(), file),
            Err(_) => return,
        },
    };
}

/// Sets up tracing from the environment, only the first call has effect
pub fn init() {
    INIT.call_once(|| {
        let target = match std::env::var(ENV_TRACE) {
            Ok(t) => t,
            Err(_) => return,
        };
        let level = std::env::var(ENV_TRACE_LEVEL).ok();
        install(&target, parse_level(level.as_deref()));
    });
}
