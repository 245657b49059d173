use std::collections::HashSet;

use taglog_config::{AppLoggerConfig, LogLevel};
use taglog_format::{Fields, RenderSettings, option_fields};

/// Immutable view of the active configuration, swapped whole on reconfigure.
#[derive(Debug, Clone)]
pub(crate) struct LoggerSnapshot {
    pub(crate) config: AppLoggerConfig,
    pub(crate) level: LogLevel,
    pub(crate) disabled_tags: HashSet<String>,
    pub(crate) option_fields: Fields,
    pub(crate) settings: RenderSettings,
}

impl LoggerSnapshot {
    /// `config.log_level` must already hold a valid level name.
    pub(crate) fn new(config: AppLoggerConfig, level: LogLevel) -> Self {
        Self {
            level,
            disabled_tags: config.disabled_tags.iter().cloned().collect(),
            option_fields: option_fields(&config.message_options),
            settings: RenderSettings {
                render_mode: config.message_options.render_mode,
                file_format: config.file_format,
                colored: config.console_colored,
            },
            config,
        }
    }

    pub(crate) fn is_tag_disabled(&self, tag: &str) -> bool {
        self.disabled_tags.contains(tag)
    }
}
