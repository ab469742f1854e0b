//! Core state machine for Quartet - no terminal, no IO.
//!
//! [`GameSession`] owns one round of play: a random four-category subset of
//! the catalog, the shuffled 16-word board, and the player's progress. It is
//! mutated only through [`GameSession::toggle_word`],
//! [`GameSession::submit_selection`], and [`GameSession::reset`], and
//! observed only through [`GameSession::snapshot`]. Presentation adapters
//! (the prompt loop and the grid UI) forward exactly those three commands
//! and redraw from the snapshot.

mod board;
mod matcher;
mod session;
mod snapshot;


pub use board::{CATEGORIES_PER_SESSION, select_categories, shuffle_board};
pub use matcher::selection_matches;
pub use session::{GameSession, GuessOutcome};
pub use snapshot::{BoardSnapshot, Tile, WordStatus};

// Re-export the domain types adapters need alongside the session.
pub use quartet_types::{
    Catalog, CatalogFormatError, Category, InsufficientCategoriesError,
    InvalidSelectionSizeError, WORDS_PER_CATEGORY, Word,
};
