use crate::app_logger::{Call, LoggerInner};

use std::sync::Weak;

use taglog_config::LogLevel;
use taglog_format::Fields;

/// Logger bound to one tag.
///
/// Holds a weak handle on its parent; once every [`crate::AppLogger`] clone
/// is dropped its calls do nothing.
#[derive(Clone)]
pub struct ChildLogger {
    tag: String,
    parent: Weak<LoggerInner>,
}

impl ChildLogger {
    pub(crate) fn new(tag: String, parent: Weak<LoggerInner>) -> Self {
        Self { tag, parent }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn is_attached(&self) -> bool {
        self.parent.strong_count() > 0
    }

    pub fn log(&self, level: LogLevel, message: &str, sub_tags: &[&str], content: &[&str]) {
        self.log_with_fields(level, message, sub_tags, content, Fields::new());
    }

    pub fn log_with_fields(
        &self,
        level: LogLevel,
        message: &str,
        sub_tags: &[&str],
        content: &[&str],
        fields: Fields,
    ) {
        let Some(parent) = self.parent.upgrade() else {
            return;
        };

        parent.dispatch(
            Call {
                level,
                tag: &self.tag,
                sub_tags,
                message,
                content,
            },
            fields,
        );
    }

    pub fn trace(&self, message: &str, sub_tags: &[&str], content: &[&str]) {
        self.log(LogLevel::Trace, message, sub_tags, content);
    }

    pub fn debug(&self, message: &str, sub_tags: &[&str], content: &[&str]) {
        self.log(LogLevel::Debug, message, sub_tags, content);
    }

    pub fn info(&self, message: &str, sub_tags: &[&str], content: &[&str]) {
        self.log(LogLevel::Info, message, sub_tags, content);
    }

    pub fn warn(&self, message: &str, sub_tags: &[&str], content: &[&str]) {
        self.log(LogLevel::Warn, message, sub_tags, content);
    }

    pub fn error(&self, message: &str, sub_tags: &[&str], content: &[&str]) {
        self.log(LogLevel::Error, message, sub_tags, content);
    }

    pub fn panic(&self, message: &str, sub_tags: &[&str], content: &[&str]) {
        self.log(LogLevel::Panic, message, sub_tags, content);
    }

    pub fn fatal(&self, message: &str, sub_tags: &[&str], content: &[&str]) {
        self.log(LogLevel::Fatal, message, sub_tags, content);
    }
}
