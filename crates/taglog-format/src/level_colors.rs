use fern::colors::Color;
use taglog_config::LogLevel;

/// Used to reset the terminal color.
pub const RESET_COLOR: &str = "\x1b[0m";

/// ANSI escape sequence written before each level's `[LEVEL]` column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelColors {
    pub trace: String,
    pub debug: String,
    pub info: String,
    pub warn: String,
    pub error: String,
    pub panic: String,
    pub fatal: String,
}

impl LevelColors {
    /// Console palette.
    pub fn ansi() -> Self {
        Self {
            trace: escape(Color::Cyan),
            debug: escape(Color::White),
            info: escape(Color::Blue),
            warn: escape(Color::Yellow),
            error: escape(Color::Red),
            panic: escape(Color::Magenta),
            fatal: escape(Color::Red),
        }
    }

    /// No coloring at all.
    pub fn none() -> Self {
        Self {
            trace: String::new(),
            debug: String::new(),
            info: String::new(),
            warn: String::new(),
            error: String::new(),
            panic: String::new(),
            fatal: String::new(),
        }
    }

    pub fn color(&self, level: LogLevel) -> &str {
        match level {
            LogLevel::Trace => &self.trace,
            LogLevel::Debug => &self.debug,
            LogLevel::Info => &self.info,
            LogLevel::Warn => &self.warn,
            LogLevel::Error => &self.error,
            LogLevel::Panic => &self.panic,
            LogLevel::Fatal => &self.fatal,
        }
    }
}

fn escape(color: Color) -> String {
    format!("\x1b[{}m", color.to_fg_str())
}
