use crate::Fields;

use serde::Serialize;

/// One line of JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRecord<'a> {
    pub time: &'a str,
    pub tag: &'a str,
    pub level: &'a str,
    pub message: &'a str,
    #[serde(rename = "subTags", skip_serializing_if = "str::is_empty")]
    pub sub_tags: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub content: &'a str,
    #[serde(flatten)]
    pub extra: Fields,
}

impl JsonRecord<'_> {
    /// Serialized record followed by CRLF.
    ///
    /// Serialization failures fall back to a record carrying only the time,
    /// tag, level and message so the line is never lost.
    pub fn to_line(&self) -> Vec<u8> {
        let mut line = serde_json::to_vec(self).unwrap_or_else(|_| {
            serde_json::json!({
                "time": self.time,
                "tag": self.tag,
                "level": self.level,
                "message": self.message,
            })
            .to_string()
            .into_bytes()
        });
        line.extend_from_slice(b"\r\n");
        line
    }
}
