//! Kinopoisk API request parameter types.

/// Maximum number of documents requested from `movie/search`.
pub const SEARCH_LIMIT: u32 = 50;

/// Request parameters for `movie/search`.
#[derive(Debug, Clone)]
pub struct SearchParams {
    /// Free-text search query.
    pub query: String,
    /// Page number (1-based).
    pub page: u32,
    /// Page size.
    pub limit: u32,
}

impl SearchParams {
    /// Creates search parameters for the first page with the default limit.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: 1,
            limit: SEARCH_LIMIT,
        }
    }

    /// Overrides the page number.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Overrides the page size.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Serializes into query pairs. Blank values are skipped entirely.
    #[must_use]
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        push_param(&mut query, "query", Some(&self.query));
        query
    }
}

/// Appends a query pair only when the value is present and non-blank.
pub(crate) fn push_param(
    query: &mut Vec<(&'static str, String)>,
    key: &'static str,
    value: Option<&str>,
) {
    if let Some(v) = value
        && !v.trim().is_empty()
    {
        query.push((key, String::from(v)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_params_defaults() {
        // Arrange & Act
        let params = SearchParams::new("dune");

        // Assert
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, SEARCH_LIMIT);
    }

    #[test]
    fn test_to_query_includes_query_text() {
        // Arrange
        let params = SearchParams::new("dune").page(2).limit(10);

        // Act
        let query = params.to_query();

        // Assert
        assert_eq!(
            query,
            vec![
                ("page", String::from("2")),
                ("limit", String::from("10")),
                ("query", String::from("dune")),
            ]
        );
    }

    #[test]
    fn test_push_param_skips_blank_values() {
        // Arrange
        let mut query: Vec<(&'static str, String)> = Vec::new();

        // Act
        push_param(&mut query, "a", None);
        push_param(&mut query, "b", Some(""));
        push_param(&mut query, "c", Some("   "));
        push_param(&mut query, "d", Some("value"));

        // Assert
        assert_eq!(query, vec![("d", String::from("value"))]);
    }
}
