//! Categories: the hidden groupings the player must discover.

use serde::Serialize;
use thiserror::Error;

use crate::Word;

/// Number of words in every category, and the number of words a submission
/// must select.
pub const WORDS_PER_CATEGORY: usize = 4;

/// A raw catalog entry that failed validation.
///
/// Every variant except `EmptyName` names the offending category so load
/// failures can be reported precisely.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogFormatError {
    #[error("category name must not be empty")]
    EmptyName,
    #[error("duplicate category name: {name}")]
    DuplicateName { name: String },
    #[error("category {name} must have exactly 4 words (got {count})")]
    WrongWordCount { name: String, count: usize },
    #[error("category {name} contains an empty word")]
    EmptyWord { name: String },
    #[error("category {name} lists \"{word}\" more than once")]
    DuplicateWord { name: String, word: String },
}

/// A named grouping of exactly four distinct words.
///
/// Only constructible through [`Category::new`], so every value in the
/// program carries the count and distinctness invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    name: String,
    words: [Word; WORDS_PER_CATEGORY],
}

impl Category {
    /// Validate a raw `(name, words)` catalog entry.
    pub fn new(
        name: impl Into<String>,
        raw_words: Vec<String>,
    ) -> Result<Self, CatalogFormatError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(CatalogFormatError::EmptyName);
        }
        if raw_words.len() != WORDS_PER_CATEGORY {
            return Err(CatalogFormatError::WrongWordCount {
                name,
                count: raw_words.len(),
            });
        }

        let mut words: Vec<Word> = Vec::with_capacity(WORDS_PER_CATEGORY);
        for raw in raw_words {
            let word = Word::new(&raw).map_err(|_| CatalogFormatError::EmptyWord {
                name: name.clone(),
            })?;
            if words.contains(&word) {
                return Err(CatalogFormatError::DuplicateWord {
                    name,
                    word: word.to_string(),
                });
            }
            words.push(word);
        }
        let words: [Word; WORDS_PER_CATEGORY] =
            words.try_into().expect("length checked above");

        Ok(Self { name, words })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }
}
