//! Record transformation into the flat template field set.
//!
//! Pure with respect to its inputs: missing or malformed optional data
//! degrades to empty arrays and zero scalars, it never aborts a
//! transformation. Errors only ever originate upstream, in the API
//! layer.

use chrono::{DateTime, Datelike, NaiveDate};
use kinonote_api::kinopoisk::{
    CurrencyValue, LinkedMovie, MovieDetails, NamedElement, Person, Premiere, SeasonInfo,
};

use crate::flat::{FlatRecord, RoleViews};
use crate::format::{FieldItem, FormatMode, format_items};
use crate::html::clean_html;

/// Maximum number of facts kept per record.
pub const MAX_FACTS: usize = 5;

/// Year bounds accepted by date normalization.
const MIN_YEAR: i32 = 1800;
const MAX_YEAR: i32 = 2100;

/// Display names for the known content-type codes. Unrecognized codes
/// pass through unchanged.
const TYPE_TRANSLATIONS: [(&str, &str); 5] = [
    ("animated-series", "Animated Series"),
    ("anime", "Anime"),
    ("cartoon", "Cartoon"),
    ("movie", "Movie"),
    ("tv-series", "TV Series"),
];

/// Folder paths for person links, one per role bucket.
///
/// Supplied by the host settings at construction time; blank entries
/// degrade to path-less link forms.
#[derive(Debug, Clone, Default)]
pub struct LinkFolders {
    /// Folder for director links.
    pub directors: String,
    /// Folder for actor links.
    pub actors: String,
    /// Folder for writer links.
    pub writers: String,
    /// Folder for producer links.
    pub producers: String,
}

/// Converts one full Kinopoisk record into a [`FlatRecord`].
#[derive(Debug, Clone, Default)]
pub struct RecordTransformer {
    folders: LinkFolders,
}

impl RecordTransformer {
    /// Creates a transformer with the given link folders.
    #[must_use]
    pub const fn new(folders: LinkFolders) -> Self {
        Self { folders }
    }

    /// Flattens a record into the template field set.
    #[allow(clippy::too_many_lines)]
    #[must_use]
    pub fn transform(&self, record: &MovieDetails) -> FlatRecord {
        let buckets = RoleBuckets::collect(&record.persons);
        let directors = role_views(&buckets.directors, &self.folders.directors);
        let actors = role_views(&buckets.actors, &self.folders.actors);
        let writers = role_views(&buckets.writers, &self.folders.writers);
        let producers = role_views(&buckets.producers, &self.folders.producers);

        let (seasons_count, average_episodes) = seasons_summary(&record.seasons_info);
        let rating = record.rating.as_ref();
        let votes = record.votes.as_ref();
        let external = record.external_id.as_ref();

        FlatRecord {
            id: record.id,
            year: record.year.unwrap_or(0),
            is_series: record.is_series,
            movie_length: record.movie_length.unwrap_or(0),
            total_series_length: record.total_series_length.unwrap_or(0),
            rating_kp: round_score(rating.and_then(|r| r.kp)),
            rating_imdb: round_score(rating.and_then(|r| r.imdb)),
            votes_kp: votes.and_then(|v| v.kp).unwrap_or(0),
            votes_imdb: votes.and_then(|v| v.imdb).unwrap_or(0),
            seasons_count,
            average_episodes,
            age_rating: record.age_rating.unwrap_or(0),
            top250: record.top250.unwrap_or(0),
            tmdb_id: external.and_then(|e| e.tmdb).unwrap_or(0),

            name: short(record.name.as_deref()),
            alternative_name: short(record.alternative_name.as_deref()),
            en_name: short(record.en_name.as_deref()),
            all_names: format_items(&named(&record.names), FormatMode::ShortValue, None),
            media_type: record
                .media_type
                .as_deref()
                .map(|code| vec![translate_type(code)])
                .unwrap_or_default(),
            status: short(record.status.as_deref()),
            slogan: short(record.slogan.as_deref()),
            description: long(record.description.as_deref()),
            short_description: long(record.short_description.as_deref()),
            rating_mpaa: short(record.rating_mpaa.as_deref()),
            imdb_id: short(external.and_then(|e| e.imdb.as_deref())),

            genres: format_items(&named(&record.genres), FormatMode::ShortValue, None),
            countries: format_items(&named(&record.countries), FormatMode::ShortValue, None),

            directors: directors.plain,
            directors_links: directors.links,
            directors_links_with_path: directors.links_with_path,
            directors_links_with_id: directors.links_with_id,
            actors: actors.plain,
            actors_links: actors.links,
            actors_links_with_path: actors.links_with_path,
            actors_links_with_id: actors.links_with_id,
            writers: writers.plain,
            writers_links: writers.links,
            writers_links_with_path: writers.links_with_path,
            writers_links_with_id: writers.links_with_id,
            producers: producers.plain,
            producers_links: producers.links,
            producers_links_with_path: producers.links_with_path,
            producers_links_with_id: producers.links_with_id,

            premiere_world: premiere_date(record, |p| p.world.as_deref()),
            premiere_russia: premiere_date(record, |p| p.russia.as_deref()),

            related_movies: format_items(&linked(&record.similar_movies), FormatMode::Link, None),
            sequels_and_prequels: format_items(
                &linked(&record.sequels_and_prequels),
                FormatMode::Link,
                None,
            ),
            networks: format_items(&network_names(record), FormatMode::ShortValue, None),
            production_companies: format_items(
                &record
                    .production_companies
                    .iter()
                    .filter_map(|company| company.name.clone())
                    .map(FieldItem::Text)
                    .collect::<Vec<_>>(),
                FormatMode::ShortValue,
                None,
            ),

            budget: format_items(&money(record.budget.as_ref()), FormatMode::ShortValue, None),
            fees_world: format_items(
                &money(record.fees.as_ref().and_then(|f| f.world.as_ref())),
                FormatMode::ShortValue,
                None,
            ),

            facts: format_items(&clean_facts(record), FormatMode::LongText, None),

            poster_url: url(record.poster.as_ref().and_then(|i| i.url.as_deref())),
            cover_url: url(record.backdrop.as_ref().and_then(|i| i.url.as_deref())),
            logo_url: url(record.logo.as_ref().and_then(|i| i.url.as_deref())),
            poster_path: Vec::new(),
            cover_path: Vec::new(),
            logo_path: Vec::new(),
        }
    }
}

/// Renders a raw image URL as a template embed.
///
/// Empty input yields an empty array. A value without an `http(s)://`
/// scheme is embedded by vault path, anything else by URL. Used by the
/// image collaborator to fill the `*_path` placeholder fields.
#[must_use]
pub fn image_embed(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        vec![format!("![]({trimmed})")]
    } else {
        vec![format!("![[{trimmed}]]")]
    }
}

/// Person items bucketed by role key.
#[derive(Debug, Default)]
struct RoleBuckets {
    directors: Vec<FieldItem>,
    actors: Vec<FieldItem>,
    writers: Vec<FieldItem>,
    producers: Vec<FieldItem>,
}

impl RoleBuckets {
    /// Single pass over the person list. Persons without a usable name
    /// or role key are skipped; roles outside the closed set are
    /// dropped.
    fn collect(persons: &[Person]) -> Self {
        let mut buckets = Self::default();
        for person in persons {
            let Some(name) = display_name(person) else {
                continue;
            };
            let Some(role) = person.en_profession.as_deref() else {
                continue;
            };
            let item = FieldItem::Entity {
                name: String::from(name),
                id: person.id,
            };
            match role {
                "director" => buckets.directors.push(item),
                "actor" => buckets.actors.push(item),
                "writer" => buckets.writers.push(item),
                "producer" => buckets.producers.push(item),
                other => tracing::debug!(role = other, "dropping unrecognized person role"),
            }
        }
        buckets
    }
}

/// Localized name, falling back to the English one.
fn display_name(person: &Person) -> Option<&str> {
    person
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .or_else(|| {
            person
                .en_name
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
        })
}

/// Renders one bucket in all four representations at once, from the
/// same ordered list, so indexes stay aligned.
fn role_views(items: &[FieldItem], folder: &str) -> RoleViews {
    RoleViews {
        plain: format_items(items, FormatMode::ShortValue, None),
        links: format_items(items, FormatMode::Link, None),
        links_with_path: format_items(items, FormatMode::LinkWithPath, Some(folder)),
        links_with_id: format_items(items, FormatMode::LinkIdWithPath, Some(folder)),
    }
}

/// Season count and the per-season episode average.
#[allow(clippy::arithmetic_side_effects)]
fn seasons_summary(seasons: &[SeasonInfo]) -> (i64, i64) {
    if seasons.is_empty() {
        return (0, 0);
    }
    let count = i64::try_from(seasons.len()).unwrap_or(i64::MAX);
    let total: i64 = seasons
        .iter()
        .map(|season| season.episodes_count.unwrap_or(0).max(0))
        .sum();
    // Ceiling keeps at least one full season's episode count even with
    // uneven splits.
    let average = (total + count - 1) / count;
    (count, average)
}

/// Renders a date string as `YYYY-MM-DD` in UTC.
///
/// Unparseable input, or a year outside [1800, 2100], yields the empty
/// string.
fn normalize_date(raw: &str) -> String {
    let parsed = DateTime::parse_from_rfc3339(raw.trim())
        .map(|dt| dt.to_utc().date_naive())
        .ok()
        .or_else(|| NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok());

    parsed
        .filter(|date| (MIN_YEAR..=MAX_YEAR).contains(&date.year()))
        .map_or_else(String::new, |date| date.format("%Y-%m-%d").to_string())
}

/// Translates a content-type code into its display name.
fn translate_type(code: &str) -> String {
    TYPE_TRANSLATIONS
        .iter()
        .find(|(key, _)| *key == code)
        .map_or_else(|| String::from(code), |(_, label)| String::from(*label))
}

/// Non-spoiler facts, cleaned of markup, capped at [`MAX_FACTS`].
fn clean_facts(record: &MovieDetails) -> Vec<FieldItem> {
    record
        .facts
        .iter()
        .filter(|fact| !fact.spoiler)
        .filter_map(|fact| fact.value.as_deref().map(clean_html))
        .filter(|text| !text.is_empty())
        .take(MAX_FACTS)
        .map(FieldItem::Text)
        .collect()
}

/// Rounds a 0-10 score to the nearest integer, half away from zero.
fn round_score(score: Option<f64>) -> i64 {
    #[allow(clippy::as_conversions, clippy::cast_possible_truncation)]
    score.map_or(0, |value| value.round() as i64)
}

/// A monetary amount rendered as `"{value} {currency}"`.
fn money(amount: Option<&CurrencyValue>) -> Vec<FieldItem> {
    let Some(amount) = amount else {
        return Vec::new();
    };
    let Some(value) = amount.value else {
        return Vec::new();
    };
    let currency = amount.currency.as_deref().map_or("", str::trim);
    let text = if currency.is_empty() {
        value.to_string()
    } else {
        format!("{value} {currency}")
    };
    vec![FieldItem::Text(text)]
}

/// Zero-or-one item from an optional scalar.
fn single(value: Option<&str>) -> Vec<FieldItem> {
    value.map_or_else(Vec::new, |v| vec![FieldItem::from(v)])
}

/// Optional scalar rendered as a short value.
fn short(value: Option<&str>) -> Vec<String> {
    format_items(&single(value), FormatMode::ShortValue, None)
}

/// Optional scalar rendered as quoted long text.
fn long(value: Option<&str>) -> Vec<String> {
    format_items(&single(value), FormatMode::LongText, None)
}

/// Optional scalar rendered as a trimmed URL.
fn url(value: Option<&str>) -> Vec<String> {
    format_items(&single(value), FormatMode::Url, None)
}

/// A premiere date projected out of the record and normalized.
fn premiere_date<'a>(
    record: &'a MovieDetails,
    pick: impl Fn(&'a Premiere) -> Option<&'a str>,
) -> Vec<String> {
    let normalized = record
        .premiere
        .as_ref()
        .and_then(pick)
        .map_or_else(String::new, normalize_date);
    if normalized.is_empty() {
        Vec::new()
    } else {
        vec![normalized]
    }
}

/// Items from name-only elements.
fn named(elements: &[NamedElement]) -> Vec<FieldItem> {
    elements
        .iter()
        .filter_map(|element| element.name.clone())
        .map(FieldItem::Text)
        .collect()
}

/// Entity items from related titles, preferring the localized name.
fn linked(movies: &[LinkedMovie]) -> Vec<FieldItem> {
    movies
        .iter()
        .filter_map(|movie| {
            let name = movie
                .name
                .as_deref()
                .or(movie.alternative_name.as_deref())
                .or(movie.en_name.as_deref())?;
            Some(FieldItem::Entity {
                name: String::from(name),
                id: movie.id,
            })
        })
        .collect()
}

/// Network names from the wrapped network list.
fn network_names(record: &MovieDetails) -> Vec<FieldItem> {
    record
        .networks
        .as_ref()
        .map_or_else(Vec::new, |networks| {
            networks
                .items
                .iter()
                .filter_map(|item| item.name.clone())
                .map(FieldItem::Text)
                .collect()
        })
}
