//! Core domain types for Quartet.
//!
//! This crate contains pure domain types with no IO, no async, and minimal
//! dependencies. Everything here can be used from any layer of the game.

mod catalog;
mod category;

pub use catalog::Catalog;
pub use category::{Category, CatalogFormatError, WORDS_PER_CATEGORY};

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Word
// ============================================================================

/// A single puzzle word.
///
/// Case-preserved, compared by exact string equality. Surrounding whitespace
/// is trimmed on construction; a word that is empty after trimming is
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word(String);

#[derive(Debug, Error)]
#[error("word must not be empty")]
pub struct EmptyWordError;

impl Word {
    pub fn new(value: impl AsRef<str>) -> Result<Self, EmptyWordError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            Err(EmptyWordError)
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Word {
    type Error = EmptyWordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Word {
    type Error = EmptyWordError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Word> for String {
    fn from(value: Word) -> Self {
        value.0
    }
}

impl std::ops::Deref for Word {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// Session-level Errors
// ============================================================================

/// The catalog is too small to draw a session's categories from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("need at least {required} categories to start a session, catalog has {available}")]
pub struct InsufficientCategoriesError {
    pub required: usize,
    pub available: usize,
}

/// A submission was attempted with the wrong number of selected words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("a submission needs exactly {required} selected words (got {selected})")]
pub struct InvalidSelectionSizeError {
    pub required: usize,
    pub selected: usize,
}

// ============================================================================
// Tests
// ============================================================================
