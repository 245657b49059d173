use crate::{
    EntryInfo, Fields, JsonRecord, LevelColors, LogEntry, RESET_COLOR, format_timestamp, pad,
};

use taglog_config::{
    DEFAULT_CONTENT_DELIMITER, DEFAULT_DATE_FORMAT, DEFAULT_LEVEL_PREALLOCATED_SIZE,
    DEFAULT_MESSAGE_PREALLOCATED_SIZE, DEFAULT_TAG_PREALLOCATED_SIZE, FileFormat,
    MAX_PREALLOCATED_SIZE, RenderMode,
};

// Keys the JSON record always writes itself.
const JSON_RECORD_KEYS: [&str; 6] = ["time", "tag", "level", "message", "subTags", "content"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkTarget {
    Console,
    File,
}

/// Rendering choices that come from the logger configuration rather than the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSettings {
    pub render_mode: RenderMode,
    pub file_format: FileFormat,
    /// Color the console output; never applies to the file sink
    pub colored: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            render_mode: RenderMode::Fixed,
            file_format: FileFormat::AlwaysJson,
            colored: true,
        }
    }
}

/// Renders entries for one sink.
#[derive(Debug, Clone)]
pub struct Formatter {
    target: SinkTarget,
    colors: LevelColors,
}

impl Formatter {
    pub fn console() -> Self {
        Self {
            target: SinkTarget::Console,
            colors: LevelColors::ansi(),
        }
    }

    /// File output is never colored.
    pub fn file() -> Self {
        Self {
            target: SinkTarget::File,
            colors: LevelColors::none(),
        }
    }

    pub fn with_colors(mut self, colors: LevelColors) -> Self {
        self.colors = colors;
        self
    }

    pub fn target(&self) -> SinkTarget {
        self.target
    }

    /// Render `entry` to the bytes written by the sink, line terminator included.
    pub fn render(&self, entry: &LogEntry, settings: &RenderSettings) -> Vec<u8> {
        let (info, residual) = EntryInfo::extract(&entry.fields);
        let date_format = or_default(&info.date_format, DEFAULT_DATE_FORMAT);
        let time = format_timestamp(&entry.timestamp, date_format);

        if self.uses_json(&info, settings) {
            let extra = match settings.render_mode {
                RenderMode::Fixed => Fields::new(),
                RenderMode::Fields => residual
                    .into_iter()
                    .filter(|(key, _)| !JSON_RECORD_KEYS.contains(&key.as_str()))
                    .collect(),
            };

            JsonRecord {
                time: &time,
                tag: &info.tag,
                level: entry.level.as_str(),
                message: &entry.message,
                sub_tags: &info.sub_tags,
                content: &info.content,
                extra,
            }
            .to_line()
        } else {
            self.render_text(entry, &info, &residual, &time, date_format, settings)
                .into_bytes()
        }
    }

    fn uses_json(&self, info: &EntryInfo, settings: &RenderSettings) -> bool {
        info.use_json_output
            || (self.target == SinkTarget::File && settings.file_format == FileFormat::AlwaysJson)
    }

    fn render_text(
        &self,
        entry: &LogEntry,
        info: &EntryInfo,
        residual: &Fields,
        time: &str,
        date_format: &str,
        settings: &RenderSettings,
    ) -> String {
        let message_size = size_or_default(
            info.message_preallocated_size,
            DEFAULT_MESSAGE_PREALLOCATED_SIZE,
        );
        let tag_size = size_or_default(info.tag_preallocated_size, DEFAULT_TAG_PREALLOCATED_SIZE);
        let level_size =
            size_or_default(info.level_preallocated_size, DEFAULT_LEVEL_PREALLOCATED_SIZE);
        let delimiter = or_default(&info.content_delimiter, DEFAULT_CONTENT_DELIMITER);
        let filler = info.text_filler.as_str();
        let spacing_off = info.disable_spacing;
        let end = format!("{filler}{delimiter}");

        let color = if self.target == SinkTarget::Console && settings.colored {
            self.colors.color(entry.level)
        } else {
            ""
        };
        let reset = if color.is_empty() { "" } else { RESET_COLOR };

        let mut line = String::with_capacity(
            date_format.len() + level_size + tag_size + message_size + info.content.len() + 16,
        );

        line.push_str(&pad(
            time,
            date_format.chars().count() + 1,
            filler,
            spacing_off,
        ));
        line.push_str(&end);

        line.push_str(color);
        line.push_str(&pad(
            &format!("[{}]", entry.level.label()),
            level_size,
            filler,
            spacing_off,
        ));
        line.push_str(&end);

        line.push_str(&pad(
            &format!("{}{}{}{}", info.tag, delimiter, info.sub_tags, reset),
            tag_size,
            filler,
            spacing_off,
        ));
        line.push_str(&end);

        line.push_str(&pad(&entry.message, message_size, filler, spacing_off));
        line.push_str(&end);

        line.push_str(&info.content);

        if settings.render_mode == RenderMode::Fields {
            for (key, value) in residual {
                line.push_str(delimiter);
                line.push_str(key);
                line.push('=');
                line.push_str(&value.to_string());
            }
        }

        line.push_str(" \n");
        line
    }
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() { default } else { value }
}

// Widths may arrive unvalidated through per-call fields.
fn size_or_default(value: usize, default: usize) -> usize {
    if value > 0 {
        value.min(MAX_PREALLOCATED_SIZE)
    } else {
        default
    }
}
