use crate::LogFileInfo;

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// `Write` handle onto whichever file the rotation manager currently holds.
///
/// Each `write` goes out whole under the manager's lock, so a record never
/// straddles a rotation. Writes after close are dropped.
#[derive(Debug, Clone)]
pub struct LogFileWriter {
    current: Arc<Mutex<LogFileInfo>>,
}

impl LogFileWriter {
    pub(crate) fn new(current: Arc<Mutex<LogFileInfo>>) -> Self {
        Self { current }
    }
}

impl Write for LogFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(file) = current.file.as_mut() {
            file.write_all(buf)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        match current.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}
