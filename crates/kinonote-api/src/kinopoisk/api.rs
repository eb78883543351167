//! `KinopoiskApi` trait definition.
#![allow(clippy::future_not_send)]

use super::error::KinopoiskError;
use super::types::{MovieDetails, MovieSearchItem};

/// Kinopoisk API trait.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(KinopoiskApi: Send)]
pub trait LocalKinopoiskApi {
    /// Searches movies and series by a free-text query.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` when the stored token or the query fails
    ///   validation (no network call is made).
    /// - `EmptyResult` when the API matched nothing; the message carries
    ///   the original query text.
    /// - A translated transport/HTTP category otherwise.
    async fn search_movies(&self, query: &str)
    -> Result<Vec<MovieSearchItem>, KinopoiskError>;

    /// Fetches one full record by its Kinopoisk ID.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` when the stored token or the ID fails validation
    ///   (no network call is made).
    /// - `EmptyResult` when the API responded with an empty body.
    /// - A translated transport/HTTP category otherwise.
    async fn movie_by_id(&self, id: i64) -> Result<MovieDetails, KinopoiskError>;

    /// Probes the API with a minimal request to check the stored token.
    ///
    /// Never propagates a failure: any error maps to `false`.
    async fn validate_token(&self) -> bool;
}
