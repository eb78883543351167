//! Flat template-ready output record.

use serde::Serialize;

/// The four parallel renderings of one role bucket.
///
/// All four are derived from the same ordered person list, so indexes
/// line up across representations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleViews {
    /// Plain sanitized names.
    pub plain: Vec<String>,
    /// `[[Name]]` links.
    pub links: Vec<String>,
    /// `[[folder/Name]]` links.
    pub links_with_path: Vec<String>,
    /// `[[folder/Id|Name]]` links.
    pub links_with_id: Vec<String>,
}

/// The flat field set substituted into note templates.
///
/// Every textual field is an ordered array (possibly empty, possibly a
/// single element) so templates can apply uniform join semantics.
/// Numeric fields default to zero, never null. A fresh record is built
/// per request and owned by the caller.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatRecord {
    /// Kinopoisk movie ID.
    pub id: i64,
    /// Release year.
    pub year: i64,
    /// Whether the record is a series.
    pub is_series: bool,
    /// Runtime in minutes (movies).
    pub movie_length: i64,
    /// Total runtime in minutes (series).
    pub total_series_length: i64,
    /// Kinopoisk score, rounded.
    pub rating_kp: i64,
    /// IMDb score, rounded.
    pub rating_imdb: i64,
    /// Kinopoisk vote count.
    pub votes_kp: i64,
    /// IMDb vote count.
    pub votes_imdb: i64,
    /// Number of seasons.
    pub seasons_count: i64,
    /// Episodes per season, rounded up.
    pub average_episodes: i64,
    /// Age restriction (years).
    pub age_rating: i64,
    /// Position in the Kinopoisk top-250, 0 when unlisted.
    pub top250: i64,
    /// TMDB numeric ID, 0 when unknown.
    pub tmdb_id: i64,

    /// Localized title.
    pub name: Vec<String>,
    /// Alternative title.
    pub alternative_name: Vec<String>,
    /// English title.
    pub en_name: Vec<String>,
    /// All known titles.
    pub all_names: Vec<String>,
    /// Translated content type.
    #[serde(rename = "type")]
    pub media_type: Vec<String>,
    /// Production status.
    pub status: Vec<String>,
    /// Tagline.
    pub slogan: Vec<String>,
    /// Long description, quoted.
    pub description: Vec<String>,
    /// One-sentence description, quoted.
    pub short_description: Vec<String>,
    /// MPAA rating code.
    pub rating_mpaa: Vec<String>,
    /// IMDb ID (`tt…`).
    pub imdb_id: Vec<String>,

    /// Genre tags.
    pub genres: Vec<String>,
    /// Country tags.
    pub countries: Vec<String>,

    /// Director names.
    pub directors: Vec<String>,
    /// Director links.
    pub directors_links: Vec<String>,
    /// Director links with folder path.
    pub directors_links_with_path: Vec<String>,
    /// Director links with folder path and id.
    pub directors_links_with_id: Vec<String>,
    /// Actor names.
    pub actors: Vec<String>,
    /// Actor links.
    pub actors_links: Vec<String>,
    /// Actor links with folder path.
    pub actors_links_with_path: Vec<String>,
    /// Actor links with folder path and id.
    pub actors_links_with_id: Vec<String>,
    /// Writer names.
    pub writers: Vec<String>,
    /// Writer links.
    pub writers_links: Vec<String>,
    /// Writer links with folder path.
    pub writers_links_with_path: Vec<String>,
    /// Writer links with folder path and id.
    pub writers_links_with_id: Vec<String>,
    /// Producer names.
    pub producers: Vec<String>,
    /// Producer links.
    pub producers_links: Vec<String>,
    /// Producer links with folder path.
    pub producers_links_with_path: Vec<String>,
    /// Producer links with folder path and id.
    pub producers_links_with_id: Vec<String>,

    /// World premiere date, `YYYY-MM-DD`.
    pub premiere_world: Vec<String>,
    /// Russian premiere date, `YYYY-MM-DD`.
    pub premiere_russia: Vec<String>,

    /// Similar titles as links.
    pub related_movies: Vec<String>,
    /// Sequels and prequels as links.
    pub sequels_and_prequels: Vec<String>,
    /// Broadcasting networks.
    pub networks: Vec<String>,
    /// Production companies.
    pub production_companies: Vec<String>,

    /// Production budget.
    pub budget: Vec<String>,
    /// Worldwide box office.
    pub fees_world: Vec<String>,

    /// Cleaned trivia entries, quoted.
    pub facts: Vec<String>,

    /// Raw poster URL.
    pub poster_url: Vec<String>,
    /// Raw backdrop URL.
    pub cover_url: Vec<String>,
    /// Raw logo URL.
    pub logo_url: Vec<String>,
    /// Poster vault path, filled by the image collaborator.
    pub poster_path: Vec<String>,
    /// Backdrop vault path, filled by the image collaborator.
    pub cover_path: Vec<String>,
    /// Logo vault path, filled by the image collaborator.
    pub logo_path: Vec<String>,
}
