//! String utilities for the domain layer.

/// Shorten text for log previews, keeping UTF-8 boundaries intact.
///
/// Text of at most `max_chars` characters is returned unchanged; longer text
/// is cut and suffixed with `…`.
pub fn preview(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_text_unchanged() {
        assert_eq!(preview("bad input", 20), "bad input");
    }

    #[test]
    fn test_preview_cuts_long_text() {
        assert_eq!(preview("abcdefghij", 5), "abcd…");
    }

    #[test]
    fn test_preview_multibyte() {
        assert_eq!(preview("推論エラーです", 3), "推論…");
    }
}
