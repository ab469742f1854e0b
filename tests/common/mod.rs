//! Shared fixtures for the integration suite.

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use quartet_types::{Catalog, Word};

/// The scenario catalog: exactly four categories, so a session must select
/// all of them.
pub fn scenario_catalog() -> Arc<Catalog> {
    Arc::new(
        Catalog::from_entries(entries(&[
            ("Fruits", &["Apple", "Banana", "Cherry", "Orange"]),
            ("Countries", &["India", "Brazil", "France", "Japan"]),
            ("Colors", &["Red", "Blue", "Green", "Yellow"]),
            ("Animals", &["Lion", "Tiger", "Elephant", "Zebra"]),
        ]))
        .unwrap(),
    )
}

/// A larger catalog for exercising subset selection.
pub fn wide_catalog() -> Arc<Catalog> {
    let names = [
        "Fruits",
        "Countries",
        "Colors",
        "Animals",
        "Instruments",
        "Planets",
        "Sports",
        "Metals",
    ];
    let raw: Vec<(String, Vec<String>)> = names
        .iter()
        .map(|name| {
            let words = (0..4).map(|i| format!("{name}-{i}")).collect();
            ((*name).to_string(), words)
        })
        .collect();
    Arc::new(Catalog::from_entries(raw).unwrap())
}

pub fn entries(raw: &[(&str, &[&str; 4])]) -> Vec<(String, Vec<String>)> {
    raw.iter()
        .map(|(name, words)| {
            (
                (*name).to_string(),
                words.iter().map(ToString::to_string).collect(),
            )
        })
        .collect()
}

pub fn word(raw: &str) -> Word {
    Word::new(raw).unwrap()
}

pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
