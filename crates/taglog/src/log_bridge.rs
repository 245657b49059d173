use crate::{AppLogger, LoggerError, LoggerResult};

use log::{LevelFilter, Metadata, Record};
use taglog_config::LogLevel;

/// Routes `log` macros through an [`AppLogger`], using the record target as
/// the tag.
pub struct LogBridge {
    logger: AppLogger,
}

impl LogBridge {
    pub fn new(logger: AppLogger) -> Self {
        Self { logger }
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        LogLevel::from(metadata.level()) >= self.logger.level()
            && !self.logger.is_tag_disabled(metadata.target())
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        self.logger.log(
            LogLevel::from(record.level()),
            record.target(),
            &[],
            &record.args().to_string(),
            &[],
        );
    }

    fn flush(&self) {
        self.logger.flush();
    }
}

/// Install a [`LogBridge`] as the process-wide `log` backend.
///
/// Fails if another logger was installed first.
pub fn install_global(logger: &AppLogger) -> LoggerResult<()> {
    log::set_boxed_logger(Box::new(LogBridge::new(logger.clone())))
        .map_err(LoggerError::install_global)?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}
