//! Utility functions for the CLI.

use indicatif::{ProgressBar, ProgressStyle};
use log::{LevelFilter, Log, Metadata, Record};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Create a progress bar with standard styling.
pub fn create_progress_bar(len: u64, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let style = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░ ");
    let pb = ProgressBar::new(len);
    pb.set_style(style);
    pb
}

/// Writes log records to stderr as `[LEVEL] message`.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Map the `-v` count to a level filter.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger. Later calls keep the first logger.
pub fn init_logger(verbosity: u8) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level_for(verbosity));
    }
}

/// Append `ext` (with its leading dot) to the full file name.
///
/// `data.txt` with `.huff` becomes `data.txt.huff`.
pub fn with_extension_appended(path: &Path, ext: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(ext);
    PathBuf::from(name)
}

/// Default output for a decompressed file.
///
/// Strips `ext` when the name ends with it, otherwise appends `.dec`.
pub fn decompressed_path(path: &Path, ext: &str) -> PathBuf {
    if let Some(name) = path.to_str() {
        if let Some(stem) = name.strip_suffix(ext) {
            if !stem.is_empty() && !stem.ends_with(std::path::MAIN_SEPARATOR) {
                return PathBuf::from(stem);
            }
        }
    }
    with_extension_appended(path, ".dec")
}

/// Format a byte count with a binary unit.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}
