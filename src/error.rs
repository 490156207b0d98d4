use std::io;
use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Failures that end the program before or outside of gameplay.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),

    #[error("cannot create log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("logger already installed: {0}")]
    Logger(#[from] SetLoggerError),
}
