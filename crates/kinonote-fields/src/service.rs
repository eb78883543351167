//! Boundary operations composing the API client and the transformer.
//!
//! Generic over the API trait so the UI layer can be driven by the real
//! client and the tests by an in-memory mock.

use kinonote_api::kinopoisk::{KinopoiskError, LocalKinopoiskApi, MovieSearchItem};
use tracing::instrument;

use crate::flat::FlatRecord;
use crate::transform::RecordTransformer;

/// Searches Kinopoisk, returning raw hits for the selection UI.
///
/// # Errors
///
/// Propagates the typed error from the API layer unchanged.
#[instrument(skip_all, fields(query = %query))]
pub async fn search(
    api: &(impl LocalKinopoiskApi + Sync),
    query: &str,
) -> Result<Vec<MovieSearchItem>, KinopoiskError> {
    api.search_movies(query).await
}

/// Fetches one full record and flattens it for template substitution.
///
/// # Errors
///
/// Propagates the typed error from the API layer; no partial record is
/// ever returned for a failed fetch.
#[instrument(skip_all, fields(id = id))]
pub async fn fetch_flat(
    api: &(impl LocalKinopoiskApi + Sync),
    transformer: &RecordTransformer,
    id: i64,
) -> Result<FlatRecord, KinopoiskError> {
    let details = api.movie_by_id(id).await?;
    Ok(transformer.transform(&details))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use std::sync::atomic::{AtomicU32, Ordering};

    use kinonote_api::kinopoisk::MovieDetails;

    use super::*;

    /// Mock API serving a canned record, counting calls.
    struct MockKinopoiskApi {
        details: MovieDetails,
        token_valid: bool,
        call_count: AtomicU32,
    }

    impl MockKinopoiskApi {
        fn new(details: MovieDetails) -> Self {
            Self {
                details,
                token_valid: true,
                call_count: AtomicU32::new(0),
            }
        }
    }

    impl LocalKinopoiskApi for MockKinopoiskApi {
        async fn search_movies(
            &self,
            query: &str,
        ) -> Result<Vec<MovieSearchItem>, KinopoiskError> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            Err(KinopoiskError::EmptyResult(format!(
                "No results found for \"{query}\""
            )))
        }

        async fn movie_by_id(&self, id: i64) -> Result<MovieDetails, KinopoiskError> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            if id == self.details.id {
                Ok(self.details.clone())
            } else {
                Err(KinopoiskError::NotFound)
            }
        }

        async fn validate_token(&self) -> bool {
            self.token_valid
        }
    }

    #[tokio::test]
    async fn test_fetch_flat_transforms_the_fetched_record() {
        // Arrange
        let json = include_str!("../../../fixtures/kinopoisk/movie_details_minimal.json");
        let details: MovieDetails = serde_json::from_str(json).unwrap();
        let mock = MockKinopoiskApi::new(details);
        let transformer = RecordTransformer::default();

        // Act
        let flat = fetch_flat(&mock, &transformer, 42).await.unwrap();

        // Assert
        assert_eq!(flat.id, 42);
        assert_eq!(flat.name, vec!["Безымянный"]);
        assert!(flat.actors.is_empty());
        assert_eq!(mock.call_count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fetch_flat_propagates_api_errors() {
        // Arrange
        let mock = MockKinopoiskApi::new(MovieDetails {
            id: 42,
            ..MovieDetails::default()
        });
        let transformer = RecordTransformer::default();

        // Act
        let result = fetch_flat(&mock, &transformer, 7).await;

        // Assert: the error passes through untransformed
        assert!(matches!(result.unwrap_err(), KinopoiskError::NotFound));
    }

    #[tokio::test]
    async fn test_search_passes_the_error_through() {
        // Arrange
        let mock = MockKinopoiskApi::new(MovieDetails::default());

        // Act
        let result = search(&mock, "nothing-here").await;

        // Assert
        let error = result.unwrap_err();
        assert!(matches!(error, KinopoiskError::EmptyResult(_)));
        assert!(error.to_string().contains("nothing-here"));
    }
}
