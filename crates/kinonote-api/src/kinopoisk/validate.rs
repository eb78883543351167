//! Input validation guards for Kinopoisk requests.
//!
//! Pure predicates, checked before any network call is issued.

/// True when the API token is non-empty after trimming.
#[must_use]
pub fn is_valid_token(token: &str) -> bool {
    !token.trim().is_empty()
}

/// True when the search query is non-empty after trimming.
#[must_use]
pub fn is_valid_search_query(query: &str) -> bool {
    !query.trim().is_empty()
}

/// True when the movie ID is a positive integer.
#[must_use]
pub const fn is_valid_movie_id(id: i64) -> bool {
    id > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_token() {
        // Arrange & Act & Assert
        assert!(is_valid_token("abc-def"));
        assert!(is_valid_token("  abc  "));
        assert!(!is_valid_token(""));
        assert!(!is_valid_token("   "));
        assert!(!is_valid_token("\t\n"));
    }

    #[test]
    fn test_valid_search_query() {
        // Arrange & Act & Assert
        assert!(is_valid_search_query("breaking bad"));
        assert!(!is_valid_search_query(""));
        assert!(!is_valid_search_query("   "));
    }

    #[test]
    fn test_valid_movie_id() {
        // Arrange & Act & Assert
        assert!(is_valid_movie_id(1));
        assert!(is_valid_movie_id(404_900));
        assert!(!is_valid_movie_id(0));
        assert!(!is_valid_movie_id(-1));
        assert!(!is_valid_movie_id(i64::MIN));
    }
}
