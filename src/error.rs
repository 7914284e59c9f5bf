use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort the game binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("cannot create log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
