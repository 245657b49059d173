//! Entry rendering for taglog.
//!
//! A [`LogEntry`] carries its tag, subtags, content and the active message
//! options as attached [`Fields`]. The [`Formatter`] pulls those reserved keys
//! back out with [`EntryInfo::extract`] and renders either the fixed-width
//! text layout or a JSON record.

pub mod date_format;
pub mod entry;
pub mod entry_info;
pub mod formatter;
pub mod json_record;
pub mod layout;
pub mod level_colors;
pub mod value;

#[cfg(test)]
mod tests;

pub use date_format::format_timestamp;
pub use entry::LogEntry;
pub use entry_info::{EntryInfo, option_fields};
pub use formatter::{Formatter, RenderSettings, SinkTarget};
pub use json_record::JsonRecord;
pub use layout::pad;
pub use level_colors::{LevelColors, RESET_COLOR};
pub use value::{Fields, LogValue};

/// Reserved field keys attached by the dispatcher and consumed by the formatter.
pub mod keys {
    pub const TAG: &str = "tag";
    pub const SUB_TAGS: &str = "subTags";
    pub const CONTENT: &str = "content";
    pub const CONTENT_DELIMITER: &str = "contentDelimiter";
    pub const TEXT_FILLER: &str = "textFiller";
    pub const MESSAGE_PREALLOCATED_SIZE: &str = "messagePreallocatedSize";
    pub const TAG_PREALLOCATED_SIZE: &str = "tagPreallocatedSize";
    pub const LEVEL_PREALLOCATED_SIZE: &str = "levelPreallocatedSize";
    pub const DATE_FORMAT: &str = "dateFormat";
    pub const USE_JSON_OUTPUT: &str = "useJsonOutput";
    pub const DISABLE_SPACING: &str = "disableSpacing";
}
