//! Daily log files: opening, rotation at UTC day boundaries, and retention.

mod clock;
mod error;
mod log_file_info;
mod log_file_writer;
mod retention;
mod rotation_manager;

#[cfg(test)]
mod tests;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{FileError, FileResult};
pub use log_file_info::LogFileInfo;
pub use log_file_writer::LogFileWriter;
pub use retention::{RemovalFailure, SweepReport, file_age_days, parse_file_date};
pub use rotation_manager::{FileRotationManager, Rotation, file_name_for};

pub const FILE_PREFIX: &str = "logs_";
pub const FILE_SUFFIX: &str = ".log";
pub const FILE_DATE_FORMAT: &str = "%Y-%m-%d";
