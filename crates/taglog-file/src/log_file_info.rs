use crate::{FileError, FileResult};

use std::fs::File;
use std::io::Write;

/// The log file currently receiving writes.
#[derive(Debug)]
pub struct LogFileInfo {
    pub name: String,
    pub(crate) file: Option<File>,
}

impl LogFileInfo {
    pub(crate) fn new(name: String, file: File) -> Self {
        Self {
            name,
            file: Some(file),
        }
    }

    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    /// Flush and drop the handle. Later calls are no-ops.
    pub(crate) fn close(&mut self) -> FileResult<()> {
        match self.file.take() {
            Some(mut file) => file
                .flush()
                .and_then(|()| file.sync_all())
                .map_err(|e| FileError::flush(self.name.clone(), e)),
            None => Ok(()),
        }
    }
}
