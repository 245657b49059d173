mod file_sink;
mod maintenance;

use crate::{AppLogger, AppLoggerConfig, ManualClock};

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, TimeZone, Utc};
use tempfile::TempDir;

/// Console writer whose output the test can read back.
#[derive(Clone, Default)]
pub(crate) struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock().unwrap()).into_owned()
    }

    pub(crate) fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub(crate) fn clear(&self) {
        self.bytes.lock().unwrap().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub(crate) fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 15).unwrap() + Duration::milliseconds(123)
}

pub(crate) fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()
}

/// Uncolored, console-only configuration.
pub(crate) fn console_config() -> AppLoggerConfig {
    AppLoggerConfig {
        file_log_disabled: true,
        console_colored: false,
        ..AppLoggerConfig::default()
    }
}

/// Uncolored configuration with file logging under `temp`.
pub(crate) fn file_config(temp: &TempDir) -> AppLoggerConfig {
    AppLoggerConfig {
        file_log_disabled: false,
        console_colored: false,
        log_dir: temp.path().join("logs"),
        ..AppLoggerConfig::default()
    }
}

/// Logger on a manual clock with its startup output already cleared.
pub(crate) fn build_logger(
    config: AppLoggerConfig,
    now: DateTime<Utc>,
) -> (AppLogger, SharedBuffer, Arc<ManualClock>) {
    let console = SharedBuffer::default();
    let clock = Arc::new(ManualClock::new(now));
    let logger = AppLogger::builder(config)
        .console_writer(console.clone())
        .clock(clock.clone())
        .build()
        .unwrap();
    console.clear();
    (logger, console, clock)
}
