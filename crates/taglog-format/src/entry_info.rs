use crate::{Fields, LogValue, keys};

use taglog_config::MessageOptions;

/// Reserved values pulled out of an entry's fields.
///
/// Empty strings and zero sizes mean "not set"; the formatter substitutes its
/// defaults for them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryInfo {
    pub tag: String,
    pub sub_tags: String,
    pub content: String,
    pub content_delimiter: String,
    pub text_filler: String,
    pub message_preallocated_size: usize,
    pub tag_preallocated_size: usize,
    pub level_preallocated_size: usize,
    pub date_format: String,
    pub use_json_output: bool,
    pub disable_spacing: bool,
}

impl EntryInfo {
    /// Split `fields` into the reserved entry info and the remaining caller fields.
    pub fn extract(fields: &Fields) -> (EntryInfo, Fields) {
        let mut info = EntryInfo::default();
        let mut residual = Fields::new();

        for (key, value) in fields {
            match key.as_str() {
                keys::TAG => info.tag = value.to_string(),
                keys::SUB_TAGS => info.sub_tags = value.to_string(),
                keys::CONTENT => info.content = value.to_string(),
                keys::CONTENT_DELIMITER => info.content_delimiter = value.to_string(),
                keys::TEXT_FILLER => info.text_filler = value.to_string(),
                keys::MESSAGE_PREALLOCATED_SIZE => {
                    info.message_preallocated_size = value.as_size()
                }
                keys::TAG_PREALLOCATED_SIZE => info.tag_preallocated_size = value.as_size(),
                keys::LEVEL_PREALLOCATED_SIZE => info.level_preallocated_size = value.as_size(),
                keys::DATE_FORMAT => info.date_format = value.to_string(),
                keys::USE_JSON_OUTPUT => info.use_json_output = value.is_true(),
                keys::DISABLE_SPACING => info.disable_spacing = value.is_true(),
                _ => {
                    residual.insert(key.clone(), value.clone());
                }
            }
        }

        (info, residual)
    }
}

/// Fields carrying `options`, attached to every entry so the formatter sees
/// the configuration that was active when the call was made.
pub fn option_fields(options: &MessageOptions) -> Fields {
    let mut fields = Fields::new();
    let mut attach = |key: &str, value: LogValue| {
        fields.insert(key.to_string(), value);
    };

    attach(keys::CONTENT_DELIMITER, options.content_delimiter.as_str().into());
    attach(keys::TEXT_FILLER, options.text_filler.as_str().into());
    attach(
        keys::MESSAGE_PREALLOCATED_SIZE,
        options.message_preallocated_size.into(),
    );
    attach(keys::TAG_PREALLOCATED_SIZE, options.tag_preallocated_size.into());
    attach(
        keys::LEVEL_PREALLOCATED_SIZE,
        options.level_preallocated_size.into(),
    );
    attach(keys::DATE_FORMAT, options.date_format.as_str().into());
    attach(keys::USE_JSON_OUTPUT, options.use_json_output.into());
    attach(keys::DISABLE_SPACING, options.disable_spacing.into());

    fields
}
