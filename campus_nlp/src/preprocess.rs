//! Text preprocessing shared by classification and extraction.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_WORD: Lazy<Regex> = Lazy::new(|| {
    #[expect(clippy::unwrap_used, reason = "pattern is statically valid")]
    Regex::new(r"[^\w\s']").unwrap()
});

static WHITESPACE: Lazy<Regex> = Lazy::new(|| {
    #[expect(clippy::unwrap_used, reason = "pattern is statically valid")]
    Regex::new(r"\s+").unwrap()
});

/// Lowercase, strip punctuation (apostrophes survive) and collapse
/// whitespace. Returns an empty string for blank input.
#[must_use]
pub fn clean_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = NON_WORD.replace_all(&lowered, "");
    let collapsed = WHITESPACE.replace_all(stripped.trim(), " ");
    collapsed.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(clean_text("What is the EXAM schedule?"), "what is the exam schedule");
    }

    #[test]
    fn keeps_apostrophes() {
        assert_eq!(clean_text("today's classes"), "today's classes");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(clean_text("  hello   there \n"), "hello there");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("  ?!  "), "");
    }
}
