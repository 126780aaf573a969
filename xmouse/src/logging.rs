//! Debug log file next to the executable.
//!
//! The child program owns the terminal, so nothing can be logged to
//! stdout or stderr without corrupting its screen. Records are appended to
//! `xmouse_debug.log` instead. `XMOUSE_LOG` sets the level (default `info`).

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::str::FromStr;

use simplelog::{Config, LevelFilter, WriteLogger};

pub fn log_path() -> PathBuf {
    std::env::current_exe()
        .unwrap_or_default()
        .parent()
        .unwrap_or(std::path::Path::new("."))
        .join("xmouse_debug.log")
}

/// Level named by an `XMOUSE_LOG` value; unset or unknown means `info`.
fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| LevelFilter::from_str(v.trim()).ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the file logger. Logging stays disabled if the file can't be
/// opened or a logger is already installed.
pub fn init() {
    let level = level_from(std::env::var("XMOUSE_LOG").ok().as_deref());

    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path())
    else {
        return;
    };

    let _ = WriteLogger::init(level, Config::default(), file);
}
