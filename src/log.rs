// src/log.rs
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::OnceLock;
use std::time::Instant;

use ::log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};

use crate::config::consts::{LOG_FILE, STORE_DIR};

static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

pub fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Elapsed time since the first log call, `HH:MM:SS.mmm`.
pub fn elapsed() -> String {
    fmt_elapsed(start().elapsed().as_millis())
}

/// Install the process logger: everything at debug and above goes to
/// `.store/debug.log`; with `verbose`, info and above is mirrored to stderr.
///
/// Safe to call more than once; only the first call installs anything.
pub fn init(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    start();

    fs::create_dir_all(STORE_DIR)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(Path::new(STORE_DIR).join(LOG_FILE))?;

    let config = ConfigBuilder::new()
        .add_filter_allow_str("perfect_giftcard")
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> =
        vec![WriteLogger::new(LevelFilter::Debug, config.clone(), file)];
    if verbose {
        loggers.push(TermLogger::new(
            LevelFilter::Info,
            config,
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }

    // Already installed: keep the first logger.
    let _ = CombinedLogger::init(loggers);
    Ok(())
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::log::info!("[{}] {}", $crate::log::elapsed(), format!($($arg)*))
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::log::debug!("[{}] {}", $crate::log::elapsed(), format!($($arg)*))
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::log::error!("[{}] {}", $crate::log::elapsed(), format!($($arg)*))
    };
}
