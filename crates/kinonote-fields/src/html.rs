//! HTML cleanup for fact texts.
//!
//! Kinopoisk fact values arrive with inline markup and a small set of
//! named entities. The tables here are fixed; there is no locale
//! negotiation.

use std::sync::LazyLock;

use regex::Regex;

/// Matches any HTML tag.
#[allow(clippy::expect_used)]
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("failed to compile tag regex"));

/// Matches any residual named or numeric entity.
#[allow(clippy::expect_used)]
static ENTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&[a-zA-Z]+;|&#[0-9]+;").expect("failed to compile entity regex"));

/// Decode table for the entities Kinopoisk facts actually use.
const ENTITIES: [(&str, &str); 11] = [
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&laquo;", "«"),
    ("&raquo;", "»"),
    ("&ndash;", "–"),
    ("&mdash;", "—"),
    ("&hellip;", "…"),
    ("&amp;", "&"),
];

/// Strips tags, decodes the known entities, and drops anything that
/// still looks like an entity. Never fails; returns trimmed text.
#[must_use]
pub fn clean_html(raw: &str) -> String {
    let mut text = TAG_RE.replace_all(raw, "").into_owned();
    for (entity, replacement) in ENTITIES {
        text = text.replace(entity, replacement);
    }
    let text = ENTITY_RE.replace_all(&text, "");
    String::from(text.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_untouched() {
        // Arrange & Act & Assert
        assert_eq!(clean_html("Just a fact."), "Just a fact.");
    }

    #[test]
    fn test_tags_are_stripped() {
        // Arrange
        let raw = "<b>Bryan Cranston</b> won <a href=\"x\">several</a> awards.";

        // Act
        let result = clean_html(raw);

        // Assert
        assert_eq!(result, "Bryan Cranston won several awards.");
    }

    #[test]
    fn test_known_entities_are_decoded() {
        // Arrange
        let raw = "Название &laquo;Breaking Bad&raquo; &mdash; сленг&nbsp;&amp;&nbsp;идиома.";

        // Act
        let result = clean_html(raw);

        // Assert
        assert_eq!(result, "Название «Breaking Bad» — сленг & идиома.");
    }

    #[test]
    fn test_residual_entities_are_dropped() {
        // Arrange
        let raw = "a&uml;b &#8212; c";

        // Act
        let result = clean_html(raw);

        // Assert
        assert_eq!(result, "ab  c");
    }

    #[test]
    fn test_result_is_trimmed() {
        // Arrange & Act & Assert
        assert_eq!(clean_html("  <i>  </i> "), "");
    }
}
