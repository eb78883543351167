//! Kinopoisk API response types.
//!
//! Wire shapes for kinopoisk.dev v1.4. Everything the API may omit or
//! null is an `Option` or a defaulted collection; downstream code
//! null-coalesces instead of failing.

use serde::Deserialize;

// --- Search ---

/// Response from the `movie/search` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    /// Matched records, at most `limit` entries.
    #[serde(default)]
    pub docs: Vec<MovieSearchItem>,
    /// Total number of matches.
    #[serde(default)]
    pub total: u32,
    /// Requested page size.
    #[serde(default)]
    pub limit: u32,
    /// Current page number.
    #[serde(default)]
    pub page: u32,
    /// Total number of pages.
    #[serde(default)]
    pub pages: u32,
}

/// A single search hit, passed verbatim to the selection UI.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieSearchItem {
    /// Kinopoisk movie ID.
    pub id: i64,
    /// Localized title.
    pub name: Option<String>,
    /// Alternative (usually international) title.
    pub alternative_name: Option<String>,
    /// English title.
    pub en_name: Option<String>,
    /// Content type code (`movie`, `tv-series`, ...).
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    /// Release year.
    pub year: Option<i64>,
    /// Poster image URLs.
    pub poster: Option<ImageSet>,
    /// Rating block.
    pub rating: Option<Rating>,
}

// --- Full record ---

/// Full movie/series record from the `movie/{id}` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetails {
    /// Kinopoisk movie ID.
    pub id: i64,
    /// Localized title.
    pub name: Option<String>,
    /// Alternative (usually international) title.
    pub alternative_name: Option<String>,
    /// English title.
    pub en_name: Option<String>,
    /// All known titles.
    #[serde(default)]
    pub names: Vec<NamedElement>,
    /// Content type code (`movie`, `tv-series`, `anime`, ...).
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    /// Release year.
    pub year: Option<i64>,
    /// Long description.
    pub description: Option<String>,
    /// One-sentence description.
    pub short_description: Option<String>,
    /// Tagline.
    pub slogan: Option<String>,
    /// Production status (`completed`, `announced`, ...).
    pub status: Option<String>,
    /// Runtime in minutes (movies).
    pub movie_length: Option<i64>,
    /// Single episode runtime in minutes (series).
    pub series_length: Option<i64>,
    /// Total runtime in minutes (series).
    pub total_series_length: Option<i64>,
    /// Age restriction (years).
    pub age_rating: Option<i64>,
    /// MPAA rating code.
    pub rating_mpaa: Option<String>,
    /// Rating block.
    pub rating: Option<Rating>,
    /// Vote counts.
    pub votes: Option<Votes>,
    /// Poster image URLs.
    pub poster: Option<ImageSet>,
    /// Backdrop image URLs.
    pub backdrop: Option<ImageSet>,
    /// Logo image URLs.
    pub logo: Option<ImageSet>,
    /// Genre tags.
    #[serde(default)]
    pub genres: Vec<NamedElement>,
    /// Country tags.
    #[serde(default)]
    pub countries: Vec<NamedElement>,
    /// Cast and crew.
    #[serde(default)]
    pub persons: Vec<Person>,
    /// Season breakdown (series only).
    #[serde(default)]
    pub seasons_info: Vec<SeasonInfo>,
    /// Production budget.
    pub budget: Option<CurrencyValue>,
    /// Box office fees.
    pub fees: Option<Fees>,
    /// Premiere dates.
    pub premiere: Option<Premiere>,
    /// Trivia entries.
    #[serde(default)]
    pub facts: Vec<FactItem>,
    /// IDs in external databases.
    pub external_id: Option<ExternalId>,
    /// Broadcasting networks (series only).
    pub networks: Option<Networks>,
    /// Production companies.
    #[serde(default)]
    pub production_companies: Vec<ProductionCompany>,
    /// Similar titles.
    #[serde(default)]
    pub similar_movies: Vec<LinkedMovie>,
    /// Sequels and prequels.
    #[serde(default)]
    pub sequels_and_prequels: Vec<LinkedMovie>,
    /// Position in the Kinopoisk top-250, when listed.
    pub top250: Option<i64>,
    /// Whether the record is a series.
    #[serde(default)]
    pub is_series: bool,
}

// --- Components ---

/// An element carrying only a display name (genre, country, title).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NamedElement {
    /// Display name.
    pub name: Option<String>,
}

/// Cast or crew member.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Kinopoisk person ID.
    pub id: Option<i64>,
    /// Localized name.
    pub name: Option<String>,
    /// English name.
    pub en_name: Option<String>,
    /// Photo URL.
    pub photo: Option<String>,
    /// Localized profession label.
    pub profession: Option<String>,
    /// English profession key (`director`, `actor`, `writer`, ...).
    pub en_profession: Option<String>,
}

/// Rating scores on the 0-10 scale.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    /// Kinopoisk score.
    pub kp: Option<f64>,
    /// IMDb score.
    pub imdb: Option<f64>,
    /// Critics score.
    pub film_critics: Option<f64>,
    /// Russian critics score.
    pub russian_film_critics: Option<f64>,
}

/// Vote counts per rating source.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Votes {
    /// Kinopoisk vote count.
    pub kp: Option<i64>,
    /// IMDb vote count.
    pub imdb: Option<i64>,
}

/// Image URL pair.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSet {
    /// Full-size image URL.
    pub url: Option<String>,
    /// Preview image URL.
    pub preview_url: Option<String>,
}

/// One season of a series.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonInfo {
    /// Season number.
    pub number: Option<i64>,
    /// Episodes in this season.
    pub episodes_count: Option<i64>,
}

/// A monetary amount with its currency symbol.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrencyValue {
    /// Amount.
    pub value: Option<i64>,
    /// Currency symbol or code.
    pub currency: Option<String>,
}

/// Box office fees per region.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Fees {
    /// Worldwide fees.
    pub world: Option<CurrencyValue>,
    /// Russian fees.
    pub russia: Option<CurrencyValue>,
    /// US fees.
    pub usa: Option<CurrencyValue>,
}

/// Premiere dates per region, RFC 3339 strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Premiere {
    /// World premiere date.
    pub world: Option<String>,
    /// Russian premiere date.
    pub russia: Option<String>,
    /// Digital release date.
    pub digital: Option<String>,
}

/// A trivia entry attached to a record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FactItem {
    /// Fact text, may contain HTML markup.
    pub value: Option<String>,
    /// Fact kind (`FACT`, `BLOOPER`, ...).
    #[serde(rename = "type")]
    pub fact_type: Option<String>,
    /// Whether the fact spoils the plot.
    #[serde(default)]
    pub spoiler: bool,
}

/// IDs of the same record in external databases.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalId {
    /// IMDb ID (`tt…`).
    pub imdb: Option<String>,
    /// TMDB numeric ID.
    pub tmdb: Option<i64>,
    /// Kinopoisk HD ID.
    pub kp_hd: Option<String>,
}

/// Wrapper for the network list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Networks {
    /// Broadcasting networks.
    #[serde(default)]
    pub items: Vec<NetworkItem>,
}

/// A broadcasting network.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NetworkItem {
    /// Network name.
    pub name: Option<String>,
}

/// A production company.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductionCompany {
    /// Company name.
    pub name: Option<String>,
}

/// A related title (similar movie, sequel, prequel).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedMovie {
    /// Kinopoisk movie ID.
    pub id: Option<i64>,
    /// Localized title.
    pub name: Option<String>,
    /// Alternative title.
    pub alternative_name: Option<String>,
    /// English title.
    pub en_name: Option<String>,
}
