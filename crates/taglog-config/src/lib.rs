mod app_logger_config;
mod error;
mod log_level;
mod message_options;

#[cfg(test)]
mod tests;

pub use app_logger_config::{AppLoggerConfig, FileFormat};
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::{LogLevel, UnknownLogLevel};
pub use message_options::{MessageOptions, RenderMode};

/// Tag used for entries the logger emits about itself.
pub const LIB_TAG: &str = "TAGLOG";

pub const DEFAULT_LOG_DIRECTORY: &str = "./logs";
pub const DEFAULT_LOG_LEVEL_STRING: &str = "trace";
pub const DEFAULT_LOG_FILE_ROTATE_DAYS: i64 = 30;

pub const DEFAULT_CONTENT_DELIMITER: &str = " ";
pub const DEFAULT_TEXT_FILLER: &str = " ";
pub const DEFAULT_MESSAGE_PREALLOCATED_SIZE: usize = 50;
pub const DEFAULT_TAG_PREALLOCATED_SIZE: usize = 25;
pub const DEFAULT_LEVEL_PREALLOCATED_SIZE: usize = 10;
pub const DEFAULT_DATE_FORMAT: &str = "YYYY-MM-DD HH:mm:ss.SSS";

// Column width constraints
pub const MAX_PREALLOCATED_SIZE: usize = 1024;
