use crate::{
    Clock, FILE_DATE_FORMAT, FILE_PREFIX, FILE_SUFFIX, FileError, FileResult, LogFileInfo,
    LogFileWriter,
};

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::NaiveDate;

/// A completed swap from one day's file to the next.
#[derive(Debug)]
pub struct Rotation {
    pub previous: String,
    pub current: String,
    /// Set when flushing the previous file failed. The swap still happened.
    pub close_error: Option<FileError>,
}

/// Owns the open log file and swaps it when the UTC date changes.
pub struct FileRotationManager {
    log_dir: PathBuf,
    clock: Arc<dyn Clock>,
    current: Arc<Mutex<LogFileInfo>>,
}

/// `logs_<YYYY-MM-DD>.log`
pub fn file_name_for(date: NaiveDate) -> String {
    format!(
        "{}{}{}",
        FILE_PREFIX,
        date.format(FILE_DATE_FORMAT),
        FILE_SUFFIX
    )
}

impl FileRotationManager {
    /// Create the log directory if needed and open today's file.
    pub fn open<P: Into<PathBuf>>(log_dir: P, clock: Arc<dyn Clock>) -> FileResult<Self> {
        let log_dir = log_dir.into();
        let name = file_name_for(clock.now().date_naive());
        let file = open_log_file(&log_dir, &name)?;

        Ok(Self {
            log_dir,
            clock,
            current: Arc::new(Mutex::new(LogFileInfo::new(name, file))),
        })
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    pub(crate) fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Writer that always targets the current file.
    pub fn writer(&self) -> LogFileWriter {
        LogFileWriter::new(self.current.clone())
    }

    pub fn current_name(&self) -> String {
        self.lock_current().name.clone()
    }

    pub fn current_path(&self) -> PathBuf {
        self.log_dir.join(self.current_name())
    }

    pub fn is_open(&self) -> bool {
        self.lock_current().is_open()
    }

    pub fn expected_file_name(&self) -> String {
        file_name_for(self.clock.now().date_naive())
    }

    /// Swap to the file for the current UTC date if it changed.
    ///
    /// The new file is opened before the old one is released; if opening
    /// fails the old handle stays in place. A flush error on the old file is
    /// carried in [`Rotation::close_error`]. A closed manager never reopens.
    pub fn check_rotation(&self) -> FileResult<Option<Rotation>> {
        let expected = self.expected_file_name();

        let mut current = self.lock_current();
        if current.name == expected || !current.is_open() {
            return Ok(None);
        }

        let file = open_log_file(&self.log_dir, &expected)?;
        let mut previous =
            std::mem::replace(&mut *current, LogFileInfo::new(expected.clone(), file));
        drop(current);

        let close_error = previous.close().err();

        Ok(Some(Rotation {
            previous: previous.name,
            current: expected,
            close_error,
        }))
    }

    /// Flush and close the current file. Subsequent writes are dropped.
    pub fn close(&self) -> FileResult<()> {
        self.lock_current().close()
    }

    fn lock_current(&self) -> MutexGuard<'_, LogFileInfo> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn open_log_file(log_dir: &Path, name: &str) -> FileResult<File> {
    if !log_dir.exists() {
        std::fs::create_dir_all(log_dir)
            .map_err(|e| FileError::create_dir(log_dir.to_path_buf(), e))?;
    }

    let path = log_dir.join(name);
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| FileError::open(path, e))
}
