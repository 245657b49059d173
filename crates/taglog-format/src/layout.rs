/// Pad `text` with `fill` up to `target_width` characters.
///
/// Text already at or beyond the target width is returned unchanged; it is
/// never truncated. An empty `fill` pads with spaces.
pub fn pad(text: &str, target_width: usize, fill: &str, disable_spacing: bool) -> String {
    let len = text.chars().count();
    if disable_spacing || len >= target_width {
        return text.to_string();
    }

    let fill = if fill.is_empty() { " " } else { fill };
    let mut padded = String::with_capacity(text.len() + (target_width - len) * fill.len());
    padded.push_str(text);
    padded.push_str(&fill.repeat(target_width - len));
    padded
}
