//! Exact-set matching of a selection against a category.

use std::collections::HashSet;

use quartet_types::{Category, Word};

/// True iff `selection` and the category's word set are equal as sets:
/// same elements, same cardinality.
///
/// Order-independent, no partial credit, no subset or superset acceptance.
/// The session layer already rejects selections that are not exactly four
/// words, but this does not assume any particular size: a three-word or
/// five-word selection simply never matches.
#[must_use]
pub fn selection_matches(selection: &[Word], category: &Category) -> bool {
    let selected: HashSet<&Word> = selection.iter().collect();
    let target: HashSet<&Word> = category.words().iter().collect();
    selected == target
}
