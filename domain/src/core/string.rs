//! String utilities for the domain layer.

/// Collapse a multi-line question into a single-line preview of at most
/// `max_len` bytes, ending in `...` when shortened (UTF-8 safe).
pub fn preview(text: &str, max_len: usize) -> String {
    let joined = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if joined.len() <= max_len {
        return joined;
    }
    let target = max_len.saturating_sub(3);
    let mut end = target.min(joined.len());
    while end > 0 && !joined.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &joined[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_joins_lines() {
        assert_eq!(
            preview("Explain:\n  a) osmosis\n  b) diffusion", 100),
            "Explain: a) osmosis b) diffusion"
        );
    }

    #[test]
    fn test_preview_truncates() {
        assert_eq!(preview("hello world", 8), "hello...");
    }

    #[test]
    fn test_preview_multibyte_boundary() {
        // Each of these characters is 3 bytes
        assert_eq!(preview("あいうえお", 10), "あい...");
    }
}
