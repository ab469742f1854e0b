//! Random category selection and board shuffling.
//!
//! Both operations take an injectable random source so a seeded rng
//! reproduces a board exactly.

use rand::Rng;
use rand::seq::{SliceRandom, index};

use quartet_types::{Catalog, Category, InsufficientCategoriesError, Word};

/// Number of categories drawn into every session.
pub const CATEGORIES_PER_SESSION: usize = 4;

/// Draw [`CATEGORIES_PER_SESSION`] distinct categories uniformly without
/// replacement, in draw order.
pub fn select_categories<R: Rng + ?Sized>(
    catalog: &Catalog,
    rng: &mut R,
) -> Result<Vec<Category>, InsufficientCategoriesError> {
    if catalog.len() < CATEGORIES_PER_SESSION {
        return Err(InsufficientCategoriesError {
            required: CATEGORIES_PER_SESSION,
            available: catalog.len(),
        });
    }
    let picks = index::sample(rng, catalog.len(), CATEGORIES_PER_SESSION);
    Ok(picks
        .iter()
        .map(|i| catalog.categories()[i].clone())
        .collect())
}

/// Flatten the selected categories into a single word pool and shuffle it.
#[must_use]
pub fn shuffle_board<R: Rng + ?Sized>(categories: &[Category], rng: &mut R) -> Vec<Word> {
    let mut words: Vec<Word> = categories
        .iter()
        .flat_map(|category| category.words().iter().cloned())
        .collect();
    words.shuffle(rng);
    words
}
