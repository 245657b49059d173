use crate::{FILE_DATE_FORMAT, FILE_PREFIX, FILE_SUFFIX, FileError, FileResult, FileRotationManager};

use std::fs::DirEntry;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Outcome of one retention sweep.
#[derive(Debug, Default)]
pub struct SweepReport {
    /// Names of deleted files, sorted
    pub removed: Vec<String>,
    pub failed: Vec<RemovalFailure>,
    /// Directory entries that could not be read while listing.
    pub unreadable: Vec<std::io::Error>,
}

#[derive(Debug)]
pub struct RemovalFailure {
    pub file_name: String,
    pub error: std::io::Error,
}

/// Date embedded in a `logs_<YYYY-MM-DD>.log` name.
pub fn parse_file_date(file_name: &str) -> Option<NaiveDate> {
    let date = file_name
        .strip_prefix(FILE_PREFIX)?
        .strip_suffix(FILE_SUFFIX)?;
    NaiveDate::parse_from_str(date, FILE_DATE_FORMAT).ok()
}

/// Whole days between the start of `date` (UTC) and `now`, rounded down.
pub fn file_age_days(date: NaiveDate, now: DateTime<Utc>) -> i64 {
    let start = date.and_time(NaiveTime::MIN).and_utc();
    (now - start).num_days()
}

impl FileRotationManager {
    /// Delete log files older than `retention_days`.
    ///
    /// A file is removed only when its age is strictly greater than the
    /// window. The file currently open is never touched. Failing to delete
    /// or read one entry does not stop the sweep; failing to list the
    /// directory does.
    pub fn sweep(&self, retention_days: i64) -> FileResult<SweepReport> {
        let entries = std::fs::read_dir(self.log_dir())
            .map_err(|e| FileError::read_dir(self.log_dir().to_path_buf(), e))?;

        Ok(self.sweep_entries(entries, retention_days))
    }

    pub(crate) fn sweep_entries<I>(&self, entries: I, retention_days: i64) -> SweepReport
    where
        I: IntoIterator<Item = std::io::Result<DirEntry>>,
    {
        let now = self.clock().now();
        let current = self.current_name();

        let mut report = SweepReport::default();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(error) => {
                    report.unreadable.push(error);
                    continue;
                }
            };

            let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if !is_file || name == current {
                continue;
            }

            let Some(date) = parse_file_date(&name) else {
                continue;
            };

            if file_age_days(date, now) > retention_days {
                match std::fs::remove_file(entry.path()) {
                    Ok(()) => report.removed.push(name),
                    Err(error) => report.failed.push(RemovalFailure {
                        file_name: name,
                        error,
                    }),
                }
            }
        }

        report.removed.sort();
        report
    }
}
