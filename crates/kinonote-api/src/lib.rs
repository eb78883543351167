//! Kinopoisk API client library for kinonote.
//!
//! Provides a typed client for the kinopoisk.dev REST API.

/// Kinopoisk API client.
pub mod kinopoisk;
