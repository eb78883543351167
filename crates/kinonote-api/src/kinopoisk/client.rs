//! `KinopoiskClient` - kinopoisk.dev API client implementation.

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::instrument;
use url::Url;

use super::api::LocalKinopoiskApi;
use super::error::KinopoiskError;
use super::params::SearchParams;
use super::types::{MovieDetails, MovieSearchItem, SearchResponse};
use super::validate::{is_valid_movie_id, is_valid_search_query, is_valid_token};

/// Default base URL for kinopoisk.dev API v1.4.
const DEFAULT_BASE_URL: &str = "https://api.kinopoisk.dev/v1.4/";

/// Header carrying the API token.
const API_KEY_HEADER: &str = "X-API-KEY";

/// Kinopoisk API client.
///
/// One logical request at a time; a failed request surfaces immediately
/// as a translated `KinopoiskError`, there is no retry logic.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct KinopoiskClient {
    /// HTTP client (reqwest, gzip enabled).
    http_client: Client,
    /// Base URL for API requests.
    base_url: Url,
    /// API token, sent trimmed in the `X-API-KEY` header.
    api_token: String,
}

/// Builder for `KinopoiskClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct KinopoiskClientBuilder {
    base_url: Option<Url>,
    api_token: Option<String>,
    user_agent: Option<String>,
}

impl KinopoiskClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            api_token: None,
            user_agent: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API token (required).
    #[must_use]
    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `api_token` is not set.
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<KinopoiskClient> {
        let api_token = self.api_token.context("api_token is required")?;
        let user_agent = self.user_agent.context("user_agent is required")?;

        let base_url = if let Some(url) = self.base_url {
            url
        } else {
            let result = Url::parse(DEFAULT_BASE_URL);
            result.context("invalid default base URL")?
        };

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .build()
            .context("failed to build HTTP client")?;

        Ok(KinopoiskClient {
            http_client,
            base_url,
            api_token,
        })
    }
}

impl KinopoiskClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> KinopoiskClientBuilder {
        KinopoiskClientBuilder::new()
    }

    /// Sends a GET request with the `X-API-KEY` header and query params,
    /// returning the raw body of a successful response.
    ///
    /// Non-success statuses and transport failures are translated into
    /// `KinopoiskError` categories before they leave this method.
    #[instrument(skip_all, fields(path = %path))]
    async fn get_text(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<String, KinopoiskError> {
        let url = match self.base_url.join(path) {
            Ok(url) => url,
            Err(error) => {
                tracing::error!(%path, %error, "failed to join URL path");
                return Err(KinopoiskError::Unknown);
            }
        };

        let request = match self
            .http_client
            .get(url)
            .header(API_KEY_HEADER, self.api_token.trim())
            .query(query)
            .build()
        {
            Ok(request) => request,
            Err(error) => return Err(KinopoiskError::from_transport(&error)),
        };

        tracing::debug!(url = %request.url(), "Kinopoisk API request");

        let response = match self.http_client.execute(request).await {
            Ok(response) => response,
            Err(error) => return Err(KinopoiskError::from_transport(&error)),
        };

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("<failed to read body>"));
            return Err(KinopoiskError::from_status(status, &body));
        }

        response
            .text()
            .await
            .map_err(|error| KinopoiskError::from_transport(&error))
    }

    /// Decodes a JSON body, mapping decode failures to `Unknown`.
    fn decode<T: serde::de::DeserializeOwned>(
        path: &str,
        body: &str,
    ) -> Result<T, KinopoiskError> {
        serde_json::from_str(body).map_err(|error| {
            tracing::error!(%path, %error, "failed to decode JSON response");
            KinopoiskError::Unknown
        })
    }

    /// Rejects a blank stored token before any network call.
    fn guard_token(&self) -> Result<(), KinopoiskError> {
        if is_valid_token(&self.api_token) {
            Ok(())
        } else {
            Err(KinopoiskError::InvalidInput(String::from(
                "API token must not be empty",
            )))
        }
    }
}

impl LocalKinopoiskApi for KinopoiskClient {
    #[instrument(skip_all)]
    async fn search_movies(
        &self,
        query: &str,
    ) -> Result<Vec<MovieSearchItem>, KinopoiskError> {
        self.guard_token()?;
        if !is_valid_search_query(query) {
            return Err(KinopoiskError::InvalidInput(String::from(
                "search query must not be empty",
            )));
        }

        let params = SearchParams::new(query);
        let body = self.get_text("movie/search", &params.to_query()).await?;
        let response: SearchResponse = Self::decode("movie/search", &body)?;

        if response.docs.is_empty() {
            return Err(KinopoiskError::EmptyResult(format!(
                "No results found for \"{query}\""
            )));
        }
        Ok(response.docs)
    }

    #[instrument(skip_all, fields(id = id))]
    async fn movie_by_id(&self, id: i64) -> Result<MovieDetails, KinopoiskError> {
        self.guard_token()?;
        if !is_valid_movie_id(id) {
            return Err(KinopoiskError::InvalidInput(format!(
                "movie id must be a positive integer, got {id}"
            )));
        }

        let path = format!("movie/{id}");
        let body = self.get_text(&path, &[]).await?;
        if body.trim().is_empty() {
            return Err(KinopoiskError::EmptyResult(format!(
                "Movie {id} returned an empty record"
            )));
        }
        Self::decode(&path, &body)
    }

    #[instrument(skip_all)]
    async fn validate_token(&self) -> bool {
        if !is_valid_token(&self.api_token) {
            return false;
        }

        let query = [
            ("page", String::from("1")),
            ("limit", String::from("1")),
        ];
        match self.get_text("movie", &query).await {
            Ok(_) => true,
            Err(error) => {
                tracing::debug!(%error, "token probe failed");
                false
            }
        }
    }
}
