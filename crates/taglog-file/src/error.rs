use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileError {
    #[error("Failed to create log directory {path}: {source} {location}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to open log file {path}: {source} {location}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to read log directory {path}: {source} {location}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to flush log file {name}: {source} {location}")]
    Flush {
        name: String,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl FileError {
    #[track_caller]
    pub fn create_dir(path: PathBuf, source: std::io::Error) -> Self {
        Self::CreateDir {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn open(path: PathBuf, source: std::io::Error) -> Self {
        Self::Open {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn read_dir(path: PathBuf, source: std::io::Error) -> Self {
        Self::ReadDir {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn flush(name: String, source: std::io::Error) -> Self {
        Self::Flush {
            name,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type FileResult<T> = std::result::Result<T, FileError>;
