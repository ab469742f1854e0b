//! Read-only session views for presentation adapters.

use serde::Serialize;

use quartet_types::{WORDS_PER_CATEGORY, Word};

use crate::session::GameSession;

/// Render status of one board word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WordStatus {
    /// Part of an already-solved category; locked against toggling.
    Correct,
    /// Currently highlighted by the player.
    Selected,
    Normal,
}

/// One board tile: a word and how to render it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tile {
    pub word: Word,
    pub status: WordStatus,
}

/// Everything an adapter needs to redraw, produced per action.
///
/// Adapters render from this and nothing else; the only mutation paths back
/// into the session are its three commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSnapshot {
    /// The shuffled word sequence with per-word status.
    pub tiles: Vec<Tile>,
    /// Currently highlighted words, in toggle order.
    pub selected: Vec<Word>,
    /// Player-facing text for the most recent submission, if any.
    pub message: Option<String>,
    /// Solved category names, in solve order.
    pub guessed_categories: Vec<String>,
    /// Unsolved categories left on the board.
    pub remaining_categories: usize,
    pub won: bool,
}

impl BoardSnapshot {
    pub(crate) fn of(session: &GameSession) -> Self {
        let tiles = session
            .board()
            .iter()
            .map(|word| {
                let status = if session.is_locked(word) {
                    WordStatus::Correct
                } else if session.selected().contains(word) {
                    WordStatus::Selected
                } else {
                    WordStatus::Normal
                };
                Tile {
                    word: word.clone(),
                    status,
                }
            })
            .collect();
        Self {
            tiles,
            selected: session.selected().to_vec(),
            message: session.last_outcome().map(super::GuessOutcome::message),
            guessed_categories: session.guessed().to_vec(),
            remaining_categories: session.remaining_count(),
            won: session.won(),
        }
    }

    /// Whether the adapter should enable submission.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.won && self.selected.len() == WORDS_PER_CATEGORY
    }
}
