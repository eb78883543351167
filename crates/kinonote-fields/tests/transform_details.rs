//! End-to-end transformation of a full fixture record.
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]
#![allow(missing_docs)]

use kinonote_api::kinopoisk::MovieDetails;
use kinonote_fields::{LinkFolders, RecordTransformer};

fn breaking_bad() -> MovieDetails {
    let json = include_str!("../../../fixtures/kinopoisk/movie_details_breaking_bad.json");
    serde_json::from_str(json).unwrap()
}

fn transformer() -> RecordTransformer {
    RecordTransformer::new(LinkFolders {
        directors: String::from("Movies/Directors"),
        actors: String::from("Movies/Actors"),
        writers: String::from("Movies/Writers"),
        producers: String::from("Movies/Producers"),
    })
}

#[test]
fn test_identity_and_scalars() {
    // Arrange
    let record = breaking_bad();

    // Act
    let flat = transformer().transform(&record);

    // Assert
    assert_eq!(flat.id, 404_900);
    assert_eq!(flat.year, 2008);
    assert!(flat.is_series);
    assert_eq!(flat.name, vec!["Во все тяжкие"]);
    assert_eq!(flat.alternative_name, vec!["Breaking Bad"]);
    assert_eq!(flat.media_type, vec!["TV Series"]);
    assert_eq!(flat.total_series_length, 2923);
    assert_eq!(flat.top250, 13);
    assert_eq!(flat.tmdb_id, 1396);
    assert_eq!(flat.imdb_id, vec!["tt0903747"]);
    // The ":" in the raw title variant is stripped
    assert_eq!(
        flat.all_names,
        vec!["Во все тяжкие", "Breaking Bad", "Br Ba"]
    );
}

#[test]
fn test_season_aggregation() {
    // Arrange
    let record = breaking_bad();

    // Act
    let flat = transformer().transform(&record);

    // Assert: ceil(62 episodes / 5 seasons) = 13
    assert_eq!(flat.seasons_count, 5);
    assert_eq!(flat.average_episodes, 13);
}

#[test]
fn test_ratings_and_votes() {
    // Arrange
    let record = breaking_bad();

    // Act
    let flat = transformer().transform(&record);

    // Assert: 8.9 -> 9, 9.5 -> 10 (half away from zero)
    assert_eq!(flat.rating_kp, 9);
    assert_eq!(flat.rating_imdb, 10);
    assert_eq!(flat.votes_kp, 1_043_576);
    assert_eq!(flat.votes_imdb, 1_890_234);
}

#[test]
fn test_person_buckets_stay_index_aligned() {
    // Arrange
    let record = breaking_bad();

    // Act
    let flat = transformer().transform(&record);

    // Assert: the composer and the nameless person are dropped
    assert_eq!(flat.actors, vec!["Брайан Крэнстон", "Аарон Пол", "Анна Ганн"]);
    assert_eq!(flat.actors.len(), flat.actors_links.len());
    assert_eq!(flat.actors.len(), flat.actors_links_with_path.len());
    assert_eq!(flat.actors.len(), flat.actors_links_with_id.len());
    assert_eq!(flat.actors_links[1], "[[Аарон Пол]]");
    assert_eq!(flat.actors_links_with_path[1], "[[Movies/Actors/Аарон Пол]]");
    assert_eq!(
        flat.actors_links_with_id[1],
        "[[Movies/Actors/1880426|Аарон Пол]]"
    );

    assert_eq!(flat.directors, vec!["Винс Гиллиган"]);
    assert_eq!(flat.writers, vec!["Винс Гиллиган"]);
    assert_eq!(flat.producers, vec!["Мишель Маклэрен"]);
    assert_eq!(
        flat.producers_links_with_id,
        vec!["[[Movies/Producers/1981558|Мишель Маклэрен]]"]
    );
}

#[test]
fn test_text_groups() {
    // Arrange
    let record = breaking_bad();

    // Act
    let flat = transformer().transform(&record);

    // Assert
    assert_eq!(flat.genres, vec!["драма", "криминал", "триллер"]);
    assert_eq!(flat.countries, vec!["США"]);
    assert_eq!(flat.slogan, vec!["Remember my name"]);
    // LongText output is quoted and newline-free
    assert_eq!(flat.description.len(), 1);
    assert!(flat.description[0].starts_with('"'));
    assert!(flat.description[0].ends_with('"'));
    assert!(!flat.description[0].contains('\n'));
    assert_eq!(flat.networks, vec!["AMC"]);
    assert_eq!(
        flat.production_companies,
        vec!["Sony Pictures Television", "High Bridge Productions"]
    );
    assert_eq!(
        flat.related_movies,
        vec!["[[Озарк]]", "[[Прослушка]]"]
    );
    assert_eq!(
        flat.sequels_and_prequels,
        vec![
            "[[El Camino Во все тяжкие]]",
            "[[Лучше звоните Солу]]"
        ]
    );
}

#[test]
fn test_premiere_dates_and_financials() {
    // Arrange
    let record = breaking_bad();

    // Act
    let flat = transformer().transform(&record);

    // Assert
    assert_eq!(flat.premiere_world, vec!["2008-01-20"]);
    assert_eq!(flat.premiere_russia, vec!["2009-11-05"]);
    assert_eq!(flat.budget, vec!["3000000 $"]);
    assert_eq!(flat.fees_world, vec!["103000000 $"]);
}

#[test]
fn test_facts_are_cleaned_and_capped() {
    // Arrange
    let record = breaking_bad();

    // Act
    let flat = transformer().transform(&record);

    // Assert: nine raw entries, one spoiler and one blank removed, capped at five
    assert_eq!(flat.facts.len(), 5);
    assert_eq!(
        flat.facts[0],
        "\"Название сериала «Breaking Bad» — южное сленговое выражение.\""
    );
    assert_eq!(
        flat.facts[1],
        "\"Брайан Крэнстон и Аарон Пол получили по несколько премий \"Эмми\".\""
    );
    assert!(flat.facts.iter().all(|fact| !fact.contains('<')));
    assert!(flat.facts.iter().all(|fact| !fact.contains("Финальная")));
}

#[test]
fn test_image_fields_and_placeholders() {
    // Arrange
    let record = breaking_bad();

    // Act
    let flat = transformer().transform(&record);

    // Assert
    assert_eq!(flat.poster_url.len(), 1);
    assert!(flat.poster_url[0].starts_with("https://"));
    assert_eq!(flat.cover_url.len(), 1);
    assert_eq!(flat.logo_url.len(), 1);
    // The image collaborator fills these in later
    assert!(flat.poster_path.is_empty());
    assert!(flat.cover_path.is_empty());
    assert!(flat.logo_path.is_empty());
}
