use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CONTENT_DELIMITER, DEFAULT_DATE_FORMAT,
    DEFAULT_LEVEL_PREALLOCATED_SIZE, DEFAULT_MESSAGE_PREALLOCATED_SIZE,
    DEFAULT_TAG_PREALLOCATED_SIZE, DEFAULT_TEXT_FILLER, MAX_PREALLOCATED_SIZE,
};

use serde::{Deserialize, Serialize};

/// Selects how fields beyond the fixed columns are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RenderMode {
    /// Fixed columns only; caller-attached fields are dropped.
    #[default]
    Fixed,
    /// Fixed columns followed by every caller-attached field as `key=value`.
    Fields,
}

/// Message layout options. Replaced wholesale on every reconfiguration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MessageOptions {
    /// Disable padding of the fixed columns
    pub disable_spacing: bool,
    /// Separator placed after every column and between tag and subtags
    pub content_delimiter: String,
    /// Fill used to pad columns to their preallocated width
    pub text_filler: String,
    /// Minimum width of the message column
    pub message_preallocated_size: usize,
    /// Minimum width of the tag/subtags column
    pub tag_preallocated_size: usize,
    /// Minimum width of the `[LEVEL]` column
    pub level_preallocated_size: usize,
    /// Timestamp pattern (`YYYY-MM-DD HH:mm:ss.SSS` tokens or a strftime pattern)
    pub date_format: String,
    /// Render every entry as JSON, overriding the text layout
    pub use_json_output: bool,
    pub render_mode: RenderMode,
}

impl Default for MessageOptions {
    fn default() -> Self {
        Self {
            disable_spacing: false,
            content_delimiter: String::from(DEFAULT_CONTENT_DELIMITER),
            text_filler: String::from(DEFAULT_TEXT_FILLER),
            message_preallocated_size: DEFAULT_MESSAGE_PREALLOCATED_SIZE,
            tag_preallocated_size: DEFAULT_TAG_PREALLOCATED_SIZE,
            level_preallocated_size: DEFAULT_LEVEL_PREALLOCATED_SIZE,
            date_format: String::from(DEFAULT_DATE_FORMAT),
            use_json_output: false,
            render_mode: RenderMode::Fixed,
        }
    }
}

impl MessageOptions {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let widths = [
            ("messagePreallocatedSize", self.message_preallocated_size),
            ("tagPreallocatedSize", self.tag_preallocated_size),
            ("levelPreallocatedSize", self.level_preallocated_size),
        ];

        for (name, width) in widths {
            if width > MAX_PREALLOCATED_SIZE {
                return Err(ConfigError::message_options(format!(
                    "messageOptions.{} must be 0-{}, got {}",
                    name, MAX_PREALLOCATED_SIZE, width
                )));
            }
        }

        Ok(())
    }
}
