use crate::error::{Result as ServerErrorResult, ServerError};

use std::fmt::Arguments;
use std::fs::{File, OpenOptions};
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use error_location::ErrorLocation;
use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback, Output};
use log::{LevelFilter, Record, info};

/// Initialize logger with fern
///
/// # Arguments
/// * `log_level` - Log level filter
/// * `log_file` - Optional path to log file. None = stdout, Some = file output
/// * `colored` - Enable colored output (ignored when logging to file)
#[track_caller]
pub fn initialize(
    log_level: confapi_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter = log_level.0;
    let location = ErrorLocation::from(Location::caller());

    let output: Output = match &log_file {
        Some(path) => open_log_file(path)?.into(),
        None => std::io::stdout().into(),
    };

    // Colors only make sense on a terminal
    let formatter = if colored && log_file.is_none() {
        let colors = ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);

        Dispatch::new().format(move |out, message, record| {
            write_line(out, colors.color(record.level()), message, record)
        })
    } else {
        Dispatch::new().format(|out, message, record| {
            write_line(out, record.level(), message, record)
        })
    };

    Dispatch::new()
        .level(level_filter)
        // hyper logs every connection at debug
        .level_for("hyper", level_filter.min(LevelFilter::Info))
        .chain(formatter.chain(output))
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
            location,
        })?;

    match log_file {
        Some(ref path) => info!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => info!("Logger initialized: level={:?}, stdout", level_filter),
    }

    // Route `tracing` events from dependencies (tower-http) into `log`
    tracing_log::LogTracer::init().ok();

    Ok(())
}

fn write_line(
    out: FormatCallback,
    level: impl std::fmt::Display,
    message: &Arguments,
    record: &Record,
) {
    out.finish(format_args!(
        "[{date} - {level}] {message} [{file}:{line}]",
        date = humantime::format_rfc3339(SystemTime::now()),
        file = record.file().unwrap_or("unknown"),
        line = record.line().unwrap_or(0),
    ))
}

fn open_log_file(path: &Path) -> ServerErrorResult<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ServerError::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ServerError::Io {
            path: path.to_path_buf(),
            source: e,
        })
}
