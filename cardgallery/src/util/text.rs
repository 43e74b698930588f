// src/util/text.rs

/// Extract the first non-empty line of `text`, trimmed.
///
/// # Examples
///
/// ```
/// use cardgallery::util::text::first_line;
///
/// assert_eq!(first_line("\n  Riga1\nRiga2"), "Riga1");
/// ```
pub fn first_line(text: &str) -> &str {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("")
}

/// Shorten `text` to at most `max_chars` characters, marking the cut with `…`.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}

/// One-line preview of a card meaning for terminal listings.
pub fn summary(text: &str, max_chars: usize) -> String {
    truncate_chars(first_line(text), max_chars)
}
