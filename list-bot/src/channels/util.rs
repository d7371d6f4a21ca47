//! Shared utilities for channel implementations.

/// Telegram rejects messages longer than this many UTF-16 code units
pub const TELEGRAM_MAX_MESSAGE_LEN: usize = 4096;

/// Length as Telegram counts it. Emoji outside the BMP count as two.
pub fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Split a message into chunks of at most `max_len` UTF-16 code units.
/// Splits on line boundaries; lines exceeding `max_len` are hard-split on
/// char boundaries.
pub fn split_message(text: &str, max_len: usize) -> Vec<String> {
    if utf16_len(text) <= max_len {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for line in text.lines() {
        let line_len = utf16_len(line);
        if current_len + line_len + 1 > max_len {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if line_len > max_len {
                for c in line.chars() {
                    let c_len = c.len_utf16();
                    if current_len + c_len > max_len && !current.is_empty() {
                        chunks.push(std::mem::take(&mut current));
                        current_len = 0;
                    }
                    current.push(c);
                    current_len += c_len;
                }
            } else {
                current = line.to_string();
                current_len = line_len;
            }
        } else {
            if !current.is_empty() {
                current.push('\n');
                current_len += 1;
            }
            current.push_str(line);
            current_len += line_len;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}
