//! String parsing utilities shared by the fact probes

/// Extract value after a colon and space
pub fn extract_after_colon(line: &str) -> Option<String> {
    line.split_once(':')
        .map(|(_, rest)| rest.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Return the nth whitespace-separated token of a line.
pub fn nth_token(line: &str, n: usize) -> Option<&str> {
    line.split_whitespace().nth(n)
}

/// Drop a trailing parenthetical, e.g. `5.2.26(1)-release` -> `5.2.26`
/// and `Noto Sans (Regular)` -> `Noto Sans`.
pub fn strip_trailing_paren(s: &str) -> String {
    s.split('(').next().unwrap_or(s).trim().to_string()
}

/// Collapse a raw value to a single printable line.
///
/// Facts are rendered at fixed cursor positions, so a stray newline or
/// control character in tool output would corrupt the layout. Anything that
/// sanitizes down to nothing becomes the sentinel.
pub fn sanitize_single_line(raw: &str) -> String {
    let first = raw.lines().next().unwrap_or("");
    let cleaned: String = first.chars().filter(|c| !c.is_control()).collect();
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        crate::utils::command::UNKNOWN.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_after_colon() {
        assert_eq!(
            extract_after_colon("model name\t: AMD Ryzen 7"),
            Some("AMD Ryzen 7".to_string())
        );
        assert_eq!(extract_after_colon("no colon here"), None);
        assert_eq!(extract_after_colon("empty: "), None);
    }

    #[test]
    fn test_nth_token() {
        assert_eq!(nth_token("GNU bash, version 5.2.26(1)-release", 3), Some("5.2.26(1)-release"));
        assert_eq!(nth_token("one two", 5), None);
    }

    #[test]
    fn test_strip_trailing_paren() {
        assert_eq!(strip_trailing_paren("5.2.26(1)-release"), "5.2.26");
        assert_eq!(strip_trailing_paren("Noto Sans (Regular)"), "Noto Sans");
        assert_eq!(strip_trailing_paren("plain"), "plain");
    }

    #[test]
    fn test_sanitize_single_line() {
        assert_eq!(sanitize_single_line("Arch Linux\nextra"), "Arch Linux");
        assert_eq!(sanitize_single_line("ok\x1b[0m"), "ok[0m");
        assert_eq!(sanitize_single_line("   \n"), "unknown");
        assert_eq!(sanitize_single_line(""), "unknown");
    }
}
