use std::fs::File;
use std::path::Path;

use clap::ValueEnum;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

use crate::error::AppError;

/// Verbosity accepted on the command line.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

/// Sends log records to `path`.
///
/// The terminal is owned by the game while it runs, so records never go to
/// stdout or stderr. Without a path no logger is installed.
pub fn init(path: Option<&Path>, level: LogLevel) -> Result<(), AppError> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path).map_err(|source| AppError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;
    WriteLogger::init(level.into(), Config::default(), file)?;
    Ok(())
}
