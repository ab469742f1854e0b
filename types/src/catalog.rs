//! The full collection of categories available before any subset is chosen.

use serde::Serialize;

use crate::category::{Category, CatalogFormatError};

/// The validated set of available categories, loaded once from an external
/// source.
///
/// Entries keep their insertion order; that order is observable only through
/// deterministic subset selection under a fixed seed. A catalog may hold
/// fewer than four categories; the session floor is enforced at session
/// start, not at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog from raw `(name, words)` entries, validating every
    /// category and rejecting name collisions.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, CatalogFormatError>
    where
        I: IntoIterator<Item = (S, Vec<String>)>,
        S: Into<String>,
    {
        let mut categories: Vec<Category> = Vec::new();
        for (name, words) in entries {
            let category = Category::new(name, words)?;
            if categories.iter().any(|c| c.name() == category.name()) {
                return Err(CatalogFormatError::DuplicateName {
                    name: category.name().to_string(),
                });
            }
            categories.push(category);
        }
        Ok(Self { categories })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name() == name)
    }
}
