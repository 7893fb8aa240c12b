//! Escaping of characters that collide with template syntax.

/// Template that renders a literal `#` at the start of a line.
pub const HASHTAG_ESCAPE: &str = "{{Hashtag}}";

/// Template that renders a literal `|` inside a template argument.
pub const PIPE_ESCAPE: &str = "{{!}}";

/// Escape a field value for use inside `{{Cite tweet}}`.
///
/// The wiki parser reads a leading `#` as list markup and a `|` as the
/// start of a new field.
pub fn escape_special_characters(wikitext: &str) -> String {
    let text = match wikitext.strip_prefix('#') {
        Some(rest) => format!("{}{}", HASHTAG_ESCAPE, rest),
        None => wikitext.to_string(),
    };
    text.replace('|', PIPE_ESCAPE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_hashtag_and_pipe() {
        assert_eq!(
            escape_special_characters("#tag|value"),
            "{{Hashtag}}tag{{!}}value"
        );
    }

    #[test]
    fn test_only_leading_hash_is_escaped() {
        assert_eq!(escape_special_characters("a #b #c"), "a #b #c");
        assert_eq!(escape_special_characters("##x"), "{{Hashtag}}#x");
    }

    #[test]
    fn test_every_pipe_is_escaped() {
        assert_eq!(escape_special_characters("a|b||c"), "a{{!}}b{{!}}{{!}}c");
    }

    #[test]
    fn test_escape_is_idempotent() {
        for input in ["#tag|value", "a|b", "{{!}}", "#", "plain"] {
            let once = escape_special_characters(input);
            assert_eq!(escape_special_characters(&once), once, "input {:?}", input);
        }
    }

    #[test]
    fn test_escape_empty() {
        assert_eq!(escape_special_characters(""), "");
    }
}
