//! Field formatting engine.
//!
//! Turns a collection of heterogeneous inputs (bare strings or named
//! entities) into a capped, sanitized sequence of template-safe strings.

/// Maximum number of items kept per formatted field.
pub const MAX_FIELD_ITEMS: usize = 50;

/// How a collection of items is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatMode {
    /// Bare sanitized string.
    ShortValue,
    /// Whitespace-collapsed text wrapped in double quotes.
    LongText,
    /// Trimmed URL, no quoting, no escaping.
    Url,
    /// `[[Name]]` wiki link.
    Link,
    /// `[[path/Name]]` wiki link, falling back to `Link` without a path.
    LinkWithPath,
    /// `[[path/Id|Name]]` wiki link. The only mode that uses the id.
    LinkIdWithPath,
}

/// A formatter input: plain text, or a named entity with an optional
/// numeric identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldItem {
    /// Plain text value.
    Text(String),
    /// A named item that may carry an identifier (person, title, ...).
    Entity {
        /// Display name.
        name: String,
        /// Numeric identifier, used by `LinkIdWithPath` only.
        id: Option<i64>,
    },
}

impl FieldItem {
    /// String form of the item.
    fn name(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Entity { name, .. } => name,
        }
    }

    /// Identifier, when the item carries one.
    const fn id(&self) -> Option<i64> {
        match self {
            Self::Text(_) => None,
            Self::Entity { id, .. } => *id,
        }
    }
}

impl From<&str> for FieldItem {
    fn from(text: &str) -> Self {
        Self::Text(String::from(text))
    }
}

impl From<String> for FieldItem {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Removes characters that would break template metadata and trims.
#[must_use]
pub fn strip_metadata_chars(value: &str) -> String {
    String::from(value.replace(':', "").trim())
}

/// Collapses every whitespace run (including newlines) to one space.
fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Formats a collection of items according to the mode.
///
/// Blank entries are dropped, the rest is truncated to
/// [`MAX_FIELD_ITEMS`] and rendered. An empty input always yields an
/// empty output array; this routine never fails.
#[must_use]
pub fn format_items(items: &[FieldItem], mode: FormatMode, path: Option<&str>) -> Vec<String> {
    items
        .iter()
        .filter(|item| !item.name().trim().is_empty())
        .take(MAX_FIELD_ITEMS)
        .map(|item| render(item, mode, path))
        .collect()
}

/// Renders one item in the given mode.
fn render(item: &FieldItem, mode: FormatMode, path: Option<&str>) -> String {
    let path = path.map(str::trim).filter(|p| !p.is_empty());
    match mode {
        FormatMode::ShortValue => strip_metadata_chars(item.name()),
        FormatMode::LongText => format!("\"{}\"", collapse_whitespace(item.name())),
        FormatMode::Url => String::from(item.name().trim()),
        FormatMode::Link => format!("[[{}]]", strip_metadata_chars(item.name())),
        FormatMode::LinkWithPath => {
            let name = strip_metadata_chars(item.name());
            path.map_or_else(|| format!("[[{name}]]"), |p| format!("[[{p}/{name}]]"))
        }
        FormatMode::LinkIdWithPath => {
            let name = strip_metadata_chars(item.name());
            match (path, item.id()) {
                (Some(p), Some(id)) => format!("[[{p}/{id}|{name}]]"),
                (None, Some(id)) => format!("[[{id}|{name}]]"),
                (_, None) => format!("[[{name}]]"),
            }
        }
    }
}
