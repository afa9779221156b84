/// Greedy word wrap for item labels, capped at three lines.
pub fn wrap_label(text: &str, max_chars_per_line: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= max_chars_per_line {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines.truncate(3);
    lines
}

pub fn truncate(text: &str, max_length: usize) -> String {
    let count = text.chars().count();
    if count <= max_length {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_length.saturating_sub(1)).collect();
    out.push_str("...");
    out
}

/// Two-letter glyph used when an entity has no logo image.
pub fn monogram(name: &str) -> String {
    name.chars().take(2).collect::<String>().to_uppercase()
}

/// Shrink a base font size until the text fits the given width. The
/// character width estimate matches the output font's average advance.
pub fn fit_font_size(text: &str, max_width: f32, base_size: f32) -> f32 {
    let char_width = base_size * 0.6;
    let text_width = text.chars().count() as f32 * char_width;
    if text_width <= max_width {
        return base_size;
    }
    (base_size * (max_width / text_width)).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_words_onto_lines() {
        let lines = wrap_label("Stargate Finance Bridge", 12);
        assert_eq!(lines, vec!["Stargate", "Finance", "Bridge"]);
    }

    #[test]
    fn wrap_caps_at_three_lines() {
        let lines = wrap_label("one two three four five six seven", 5);
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn short_text_is_one_line() {
        assert_eq!(wrap_label("Pyth", 12), vec!["Pyth"]);
    }

    #[test]
    fn monogram_is_two_uppercase_chars() {
        assert_eq!(monogram("Chainlink"), "CH");
        assert_eq!(monogram("abrdn"), "AB");
        assert_eq!(monogram("X"), "X");
    }

    #[test]
    fn truncates_with_ellipsis() {
        assert_eq!(truncate("Hedera Consensus Service", 10), "Hedera Co...");
        assert_eq!(truncate("Short", 10), "Short");
    }

    #[test]
    fn font_size_shrinks_for_long_text() {
        assert_eq!(fit_font_size("Hi", 100.0, 14.0), 14.0);
        assert!(fit_font_size("A very long entity name", 40.0, 14.0) < 14.0);
    }
}
