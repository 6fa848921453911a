//! Log sanitization utilities
//!
//! Keeps response bodies and signing material (session tokens, access keys)
//! from being fully exposed in debug/error logs.

/// Maximum number of bytes to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading characters kept visible by [`mask_key`].
const MASK_VISIBLE: usize = 4;

fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Strings over `TRUNCATE_LIMIT` bytes are cut at a char boundary and
/// suffixed with the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Mask a key, keeping only its first few characters: `AKIA****`.
pub fn mask_key(key: &str) -> String {
    let visible = floor_char_boundary(key, MASK_VISIBLE);
    if visible >= key.len() {
        return "****".to_string();
    }
    format!("{}****", &key[..visible])
}

/// Replace every occurrence of `secret` in `text` with its masked form.
pub fn redact(text: &str, secret: Option<&str>) -> String {
    match secret {
        Some(secret) if !secret.is_empty() => text.replace(secret, &mask_key(secret)),
        _ => text.to_string(),
    }
}
