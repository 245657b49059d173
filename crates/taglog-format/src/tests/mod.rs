
use crate::{LogEntry, LogValue, keys};

use chrono::{DateTime, Duration, TimeZone, Utc};
use taglog_config::LogLevel;

pub(crate) fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 15).unwrap() + Duration::milliseconds(123)
}

/// Entry with the fields the dispatcher attaches for a tagged call.
pub(crate) fn tagged_entry(
    level: LogLevel,
    tag: &str,
    sub_tags: &[&str],
    message: &str,
    content: &[&str],
) -> LogEntry {
    LogEntry::new(fixed_time(), level, message)
        .with_field(keys::TAG, tag)
        .with_field(keys::SUB_TAGS, LogValue::from(sub_tags))
        .with_field(keys::CONTENT, LogValue::from(content))
}
