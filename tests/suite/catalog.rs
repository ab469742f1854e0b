//! Catalog validation and acquisition.

use quartet_catalog::{CatalogError, CatalogSource};
use quartet_engine::GameSession;
use quartet_types::{Catalog, CatalogFormatError};

use crate::common::{entries, seeded};

#[test]
fn three_categories_cannot_start_a_session() {
    let catalog = Catalog::from_entries(entries(&[
        ("Fruits", &["Apple", "Banana", "Cherry", "Orange"]),
        ("Colors", &["Red", "Blue", "Green", "Yellow"]),
        ("Animals", &["Lion", "Tiger", "Elephant", "Zebra"]),
    ]))
    .unwrap();

    let err = GameSession::new(catalog.into(), &mut seeded(0)).unwrap_err();
    assert_eq!(err.available, 3);
    assert_eq!(err.required, 4);
}

#[test]
fn malformed_entries_name_the_offending_category() {
    let short = Catalog::from_entries(entries_with("Colors", vec!["Red", "Blue"]));
    match short.unwrap_err() {
        CatalogFormatError::WrongWordCount { name, count } => {
            assert_eq!(name, "Colors");
            assert_eq!(count, 2);
        }
        other => panic!("unexpected error: {other}"),
    }

    let duplicated = Catalog::from_entries(entries_with(
        "Colors",
        vec!["Red", "Red", "Green", "Yellow"],
    ));
    match duplicated.unwrap_err() {
        CatalogFormatError::DuplicateWord { name, word } => {
            assert_eq!(name, "Colors");
            assert_eq!(word, "Red");
        }
        other => panic!("unexpected error: {other}"),
    }
}

fn entries_with(name: &str, words: Vec<&str>) -> Vec<(String, Vec<String>)> {
    vec![(
        name.to_string(),
        words.into_iter().map(ToString::to_string).collect(),
    )]
}

#[tokio::test]
async fn builtin_source_supports_a_full_game() {
    let catalog = CatalogSource::Builtin.load().await.unwrap();
    assert!(catalog.len() >= 4);

    let session = GameSession::new(catalog.into(), &mut seeded(7)).unwrap();
    assert_eq!(session.board().len(), 16);
}

#[tokio::test]
async fn file_source_round_trips_the_wire_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(
        &path,
        r#"{"categories": {
            "Fruits": ["Apple", "Banana", "Cherry", "Orange"],
            "Countries": ["India", "Brazil", "France", "Japan"],
            "Colors": ["Red", "Blue", "Green", "Yellow"],
            "Animals": ["Lion", "Tiger", "Elephant", "Zebra"]
        }}"#,
    )
    .unwrap();

    let catalog = CatalogSource::File(path).load().await.unwrap();
    assert_eq!(catalog.len(), 4);
    assert!(catalog.get("Animals").is_some());
}

#[tokio::test]
async fn malformed_file_reports_a_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(
        &path,
        r#"{"categories": {"Fruits": ["Apple", "Banana", "Cherry"]}}"#,
    )
    .unwrap();

    let err = CatalogSource::File(path).load().await.unwrap_err();
    assert!(matches!(err, CatalogError::Format(_)));
    assert!(err.to_string().contains("Fruits"));
}
