/// Collapse whitespace and truncate to at most `width` display characters.
///
/// Truncation happens at word boundaries and appends `…`, which counts toward
/// the width. Text that already fits is returned with only its whitespace
/// collapsed.
pub(crate) fn shorten(text: &str, width: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= width {
        return collapsed;
    }

    let mut out = String::new();
    let mut out_chars = 0;
    for word in collapsed.split(' ') {
        let word_chars = word.chars().count();
        let candidate = if out.is_empty() {
            word_chars
        } else {
            out_chars + 1 + word_chars
        };
        // Reserve one character for the ellipsis
        if candidate + 1 > width {
            break;
        }
        if !out.is_empty() {
            out.push(' ');
            out_chars += 1;
        }
        out.push_str(word);
        out_chars += word_chars;
    }
    out.push('…');
    out
}

/// Escape table delimiters so free text cannot corrupt a Markdown table row
pub(crate) fn escape_pipes(text: &str) -> String {
    text.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_passes_through() {
        assert_eq!(shorten("hello world", 80), "hello world");
    }

    #[test]
    fn whitespace_is_collapsed() {
        assert_eq!(shorten("  hello \t  world \n", 80), "hello world");
    }

    #[test]
    fn long_text_is_cut_at_word_boundary() {
        let s = shorten("alpha beta gamma delta", 12);
        assert_eq!(s, "alpha beta…");
        assert!(s.chars().count() <= 12);
    }

    #[test]
    fn result_never_exceeds_width() {
        let text = "word ".repeat(50);
        for width in [5, 10, 40, 80] {
            assert!(shorten(&text, width).chars().count() <= width);
        }
    }

    #[test]
    fn width_counts_characters_not_bytes() {
        let text = "héllo wörld désu ".repeat(10);
        assert!(shorten(&text, 20).chars().count() <= 20);
    }

    #[test]
    fn pipes_are_escaped() {
        assert_eq!(escape_pipes("a | b"), "a \\| b");
        assert_eq!(escape_pipes("no pipes"), "no pipes");
    }
}
