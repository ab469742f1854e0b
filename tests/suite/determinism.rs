//! Reproducibility under injected seeds.

use std::sync::Arc;

use quartet_engine::{GameSession, select_categories, shuffle_board};
use quartet_types::Category;

use crate::common::{seeded, wide_catalog};

#[test]
fn equal_seeds_select_equal_subsets() {
    let catalog = wide_catalog();
    let first = select_categories(&catalog, &mut seeded(42)).unwrap();
    let second = select_categories(&catalog, &mut seeded(42)).unwrap();

    let names = |picked: &[Category]| -> Vec<String> {
        picked.iter().map(|c| c.name().to_string()).collect()
    };
    assert_eq!(names(&first), names(&second));
}

#[test]
fn equal_seeds_shuffle_identically() {
    let catalog = wide_catalog();
    let picked = select_categories(&catalog, &mut seeded(5)).unwrap();

    let first = shuffle_board(&picked, &mut seeded(9));
    let second = shuffle_board(&picked, &mut seeded(9));
    assert_eq!(first, second);
}

#[test]
fn sessions_share_one_rng_stream() {
    // Selection and shuffle both draw from the injected source, so a whole
    // session construction is reproducible end to end.
    let catalog = wide_catalog();
    let first = GameSession::new(Arc::clone(&catalog), &mut seeded(1234)).unwrap();
    let second = GameSession::new(Arc::clone(&catalog), &mut seeded(1234)).unwrap();

    assert_eq!(first.board(), second.board());
    assert_eq!(first.remaining_count(), second.remaining_count());
}

#[test]
fn different_seeds_usually_differ() {
    // Not a property of any single pair of seeds, but these particular ones
    // must differ for the fixture to be useful.
    let catalog = wide_catalog();
    let first = GameSession::new(Arc::clone(&catalog), &mut seeded(0)).unwrap();
    let second = GameSession::new(catalog, &mut seeded(1)).unwrap();
    assert_ne!(first.board(), second.board());
}
