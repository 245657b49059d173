use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_LOG_DIRECTORY, DEFAULT_LOG_FILE_ROTATE_DAYS,
    DEFAULT_LOG_LEVEL_STRING, MessageOptions,
};

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the file sink renders entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FileFormat {
    /// The file always receives JSON records.
    #[default]
    AlwaysJson,
    /// The file follows `useJsonOutput`, like the console.
    SameAsConsole,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppLoggerConfig {
    /// Days a log file is kept (<= 0 keeps the current value)
    pub log_file_rotate_days: i64,
    pub file_log_disabled: bool,
    /// Tags whose entries are dropped by every sink
    pub disabled_tags: Vec<String>,
    /// Lowest level emitted (trace, debug, info, warn, error, panic, fatal)
    pub log_level: String,
    pub message_options: MessageOptions,
    pub log_dir: PathBuf,
    /// Use ANSI colors on the console sink
    pub console_colored: bool,
    pub file_format: FileFormat,
}

impl Default for AppLoggerConfig {
    fn default() -> Self {
        Self {
            log_file_rotate_days: DEFAULT_LOG_FILE_ROTATE_DAYS,
            file_log_disabled: false,
            disabled_tags: Vec::new(),
            log_level: String::from(DEFAULT_LOG_LEVEL_STRING),
            message_options: MessageOptions::default(),
            log_dir: PathBuf::from(DEFAULT_LOG_DIRECTORY),
            console_colored: true,
            file_format: FileFormat::AlwaysJson,
        }
    }
}

impl AppLoggerConfig {
    /// Load config from a TOML file.
    ///
    /// Loading order:
    /// 1. Parse `path` if it exists, else use defaults
    /// 2. Apply TAGLOG_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load(path: &Path) -> ConfigErrorResult<Self> {
        let mut config = if path.exists() {
            Self::load_toml(path)?
        } else {
            AppLoggerConfig::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.log_dir.as_os_str().is_empty() {
            return Err(ConfigError::config("logDir must not be empty"));
        }

        self.message_options.validate()?;

        Ok(())
    }

    /// Retention window in days, falling back to `current` when this config
    /// carries no positive value.
    pub fn retention_days_or(&self, current: i64) -> i64 {
        if self.log_file_rotate_days > 0 {
            self.log_file_rotate_days
        } else {
            current
        }
    }

    fn apply_env_overrides(&mut self) {
        Self::apply_env_string("TAGLOG_LOG_LEVEL", &mut self.log_level);
        Self::apply_env_bool("TAGLOG_FILE_LOG_DISABLED", &mut self.file_log_disabled);
        Self::apply_env_parse(
            "TAGLOG_LOG_FILE_ROTATE_DAYS",
            &mut self.log_file_rotate_days,
        );
        Self::apply_env_list("TAGLOG_DISABLED_TAGS", &mut self.disabled_tags);
        Self::apply_env_parse("TAGLOG_LOG_DIR", &mut self.log_dir);
        Self::apply_env_bool("TAGLOG_CONSOLE_COLORED", &mut self.console_colored);

        // Message options
        Self::apply_env_bool(
            "TAGLOG_USE_JSON_OUTPUT",
            &mut self.message_options.use_json_output,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for comma separated lists
    fn apply_env_list(var_name: &str, target: &mut Vec<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }
}
