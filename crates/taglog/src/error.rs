use std::panic::Location;

use error_location::ErrorLocation;
use taglog_file::FileError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("Log file error: {0}")]
    File(#[from] FileError),

    #[error("Log maintenance requires a tokio runtime {location}")]
    NoRuntime { location: ErrorLocation },

    #[error("Logger has been shut down {location}")]
    ShutDown { location: ErrorLocation },

    #[error("Log maintenance task failed: {message} {location}")]
    Maintenance {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to install global logger: {source} {location}")]
    InstallGlobal {
        #[source]
        source: log::SetLoggerError,
        location: ErrorLocation,
    },
}

impl LoggerError {
    #[track_caller]
    pub fn no_runtime() -> Self {
        Self::NoRuntime {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn shut_down() -> Self {
        Self::ShutDown {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn maintenance<S: Into<String>>(message: S) -> Self {
        Self::Maintenance {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn install_global(source: log::SetLoggerError) -> Self {
        Self::InstallGlobal {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type LoggerResult<T> = std::result::Result<T, LoggerError>;
