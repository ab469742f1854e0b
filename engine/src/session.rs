//! The game session state machine.

use std::collections::HashSet;
use std::sync::Arc;

use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use quartet_types::{
    Catalog, Category, InsufficientCategoriesError, InvalidSelectionSizeError,
    WORDS_PER_CATEGORY, Word,
};

use crate::board::{select_categories, shuffle_board};
use crate::matcher::selection_matches;
use crate::snapshot::BoardSnapshot;

/// Outcome of the most recent submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GuessOutcome {
    /// The selection exactly matched a remaining category.
    Solved { category: String },
    /// The selection matched no remaining category. Not an error: a wrong
    /// guess is a normal, expected turn.
    Miss,
}

impl GuessOutcome {
    /// The player-facing text for this outcome.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            GuessOutcome::Solved { category } => {
                format!("Correct! You've found the {category} category!")
            }
            GuessOutcome::Miss => "That's not a correct group. Try again!".to_string(),
        }
    }
}

/// One interactive round of the puzzle.
///
/// The session is `InProgress` until every drawn category has been solved,
/// then `Won` (terminal: toggles and submissions become no-ops until
/// [`GameSession::reset`]). The solved and unsolved categories together are
/// always exactly the four drawn at start. Solving removes a category
/// permanently; nothing is ever added back.
#[derive(Debug, Clone)]
pub struct GameSession {
    catalog: Arc<Catalog>,
    board: Vec<Word>,
    remaining: Vec<Category>,
    guessed: Vec<String>,
    correct_words: HashSet<Word>,
    selected: Vec<Word>,
    last_outcome: Option<GuessOutcome>,
}

impl GameSession {
    /// Start a session: draw a random four-category subset of the catalog
    /// and shuffle the combined word pool.
    pub fn new<R: Rng + ?Sized>(
        catalog: Arc<Catalog>,
        rng: &mut R,
    ) -> Result<Self, InsufficientCategoriesError> {
        let remaining = select_categories(&catalog, rng)?;
        let board = shuffle_board(&remaining, rng);
        info!(
            categories = remaining.len(),
            words = board.len(),
            "session started"
        );
        Ok(Self {
            catalog,
            board,
            remaining,
            guessed: Vec::new(),
            correct_words: HashSet::new(),
            selected: Vec::new(),
            last_outcome: None,
        })
    }

    /// Toggle a word in or out of the current selection.
    ///
    /// Silently does nothing when the session is won, the word is locked by
    /// an already-solved category, the word is not on the board, or a fifth
    /// word is toggled while four are selected. Toggling a selected word
    /// deselects it, so a toggle pair is always a no-op.
    pub fn toggle_word(&mut self, word: &Word) {
        if self.won() || self.correct_words.contains(word) || !self.board.contains(word) {
            return;
        }
        if let Some(pos) = self.selected.iter().position(|w| w == word) {
            self.selected.remove(pos);
        } else if self.selected.len() < WORDS_PER_CATEGORY {
            self.selected.push(word.clone());
        }
    }

    /// Check the current selection against the remaining categories.
    ///
    /// Rejects any selection that is not exactly four words, leaving all
    /// state untouched. Otherwise the first remaining category (in draw
    /// order) whose word set equals the selection is solved: removed from
    /// the remaining set, its name appended to the guessed list, its words
    /// locked. A miss removes nothing. Either way the selection is cleared
    /// and the outcome recorded; once the last category is solved the
    /// session is won. A no-op when already won.
    pub fn submit_selection(&mut self) -> Result<(), InvalidSelectionSizeError> {
        if self.won() {
            return Ok(());
        }
        if self.selected.len() != WORDS_PER_CATEGORY {
            return Err(InvalidSelectionSizeError {
                required: WORDS_PER_CATEGORY,
                selected: self.selected.len(),
            });
        }

        let matched = self
            .remaining
            .iter()
            .position(|category| selection_matches(&self.selected, category));
        if let Some(pos) = matched {
            let category = self.remaining.remove(pos);
            self.correct_words
                .extend(category.words().iter().cloned());
            self.guessed.push(category.name().to_string());
            debug!(category = category.name(), "group solved");
            self.last_outcome = Some(GuessOutcome::Solved {
                category: category.name().to_string(),
            });
            if self.remaining.is_empty() {
                info!(groups = self.guessed.len(), "all categories solved");
            }
        } else {
            debug!("selection matched no remaining category");
            self.last_outcome = Some(GuessOutcome::Miss);
        }
        self.selected.clear();
        Ok(())
    }

    /// Discard all progress and rebuild the session from the owned catalog:
    /// a fresh draw, a fresh shuffle, back to `InProgress`. Always succeeds.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = Self::new(Arc::clone(&self.catalog), rng)
            .expect("catalog size was proven when the session started");
    }

    /// True once every drawn category has been solved. Never reverts within
    /// a session's lifetime short of [`GameSession::reset`].
    #[must_use]
    pub fn won(&self) -> bool {
        self.remaining.is_empty()
    }

    /// The shuffled word pool, fixed for the session's lifetime.
    #[must_use]
    pub fn board(&self) -> &[Word] {
        &self.board
    }

    /// Currently highlighted words, in toggle order.
    #[must_use]
    pub fn selected(&self) -> &[Word] {
        &self.selected
    }

    /// Solved category names, in solve order.
    #[must_use]
    pub fn guessed(&self) -> &[String] {
        &self.guessed
    }

    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }

    /// Whether a word belongs to an already-solved category.
    #[must_use]
    pub fn is_locked(&self, word: &Word) -> bool {
        self.correct_words.contains(word)
    }

    #[must_use]
    pub fn last_outcome(&self) -> Option<&GuessOutcome> {
        self.last_outcome.as_ref()
    }

    /// Produce the read-only view adapters render from.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::of(self)
    }
}
