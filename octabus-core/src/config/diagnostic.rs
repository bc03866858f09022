//! Helpers for build-time config error reports

/// First `max` characters of `s`, never splitting a UTF-8 sequence
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}
