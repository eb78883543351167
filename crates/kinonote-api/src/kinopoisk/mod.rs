//! Kinopoisk API client module.
//!
//! Handles HTTP requests to the kinopoisk.dev REST endpoints and
//! retrieves search results and full movie records.

mod api;
mod client;
mod error;
mod params;
mod types;
mod validate;

#[allow(clippy::module_name_repetitions)]
pub use api::{KinopoiskApi, LocalKinopoiskApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{KinopoiskClient, KinopoiskClientBuilder};
#[allow(clippy::module_name_repetitions)]
pub use error::KinopoiskError;
pub use params::{SEARCH_LIMIT, SearchParams};
pub use types::{
    CurrencyValue, ExternalId, FactItem, Fees, ImageSet, LinkedMovie, MovieDetails,
    MovieSearchItem, NamedElement, NetworkItem, Networks, Person, Premiere, ProductionCompany,
    Rating, SearchResponse, SeasonInfo, Votes,
};
pub use validate::{is_valid_movie_id, is_valid_search_query, is_valid_token};
