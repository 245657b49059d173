//! Tag-aware application logger.
//!
//! [`AppLogger`] fans every call out to a console sink and, unless disabled,
//! a daily rotating file sink. Each call carries a tag, optional subtags, a
//! message and content; tags listed in the config are dropped before any
//! work is done. Configuration can be replaced at runtime with
//! [`AppLogger::reconfigure`], and [`AppLogger::spawn_maintenance`] runs the
//! rotation check and retention sweep on a tokio runtime.

mod app_logger;
mod child_logger;
mod error;
mod log_bridge;
mod maintenance;
mod sink;
mod snapshot;

#[cfg(test)]
mod tests;

pub use app_logger::{AppLogger, AppLoggerBuilder};
pub use child_logger::ChildLogger;
pub use error::{LoggerError, LoggerResult};
pub use log_bridge::{LogBridge, install_global};
pub use maintenance::MaintenanceSchedule;

pub use taglog_config::{AppLoggerConfig, FileFormat, LogLevel, MessageOptions, RenderMode};
pub use taglog_file::{Clock, ManualClock, SystemClock};
pub use taglog_format::{Fields, LogValue};
