//! End-to-end session walkthroughs over the scenario catalog.

use std::sync::Arc;

use quartet_engine::{GameSession, GuessOutcome};

use crate::common::{scenario_catalog, seeded, word};

fn toggle_all(session: &mut GameSession, words: &[&str]) {
    for raw in words {
        session.toggle_word(&word(raw));
    }
}

#[test]
fn full_game_walkthrough() {
    let mut rng = seeded(0);
    let mut session = GameSession::new(scenario_catalog(), &mut rng).unwrap();

    // With exactly four categories available, the session holds all of them.
    assert_eq!(session.board().len(), 16);
    assert_eq!(session.remaining_count(), 4);

    // First guess: the complete Fruits group.
    toggle_all(&mut session, &["Apple", "Banana", "Cherry", "Orange"]);
    session.submit_selection().unwrap();
    assert_eq!(
        session.last_outcome(),
        Some(&GuessOutcome::Solved {
            category: "Fruits".to_string()
        })
    );
    assert_eq!(session.remaining_count(), 3);
    for raw in ["Apple", "Banana", "Cherry", "Orange"] {
        assert!(session.is_locked(&word(raw)));
    }

    // A cross-category guess misses and removes nothing. Apple is locked by
    // the solved Fruits group, so a fourth unsolved word stands in.
    toggle_all(&mut session, &["India", "Red", "Lion", "Tiger"]);
    session.submit_selection().unwrap();
    assert_eq!(session.last_outcome(), Some(&GuessOutcome::Miss));
    assert_eq!(session.remaining_count(), 3);
    assert!(session.selected().is_empty());

    // Solve the rest; the win lands exactly on the fourth solved group.
    for group in [
        ["India", "Brazil", "France", "Japan"],
        ["Red", "Blue", "Green", "Yellow"],
    ] {
        toggle_all(&mut session, &group);
        session.submit_selection().unwrap();
        assert!(!session.won());
    }
    toggle_all(&mut session, &["Lion", "Tiger", "Elephant", "Zebra"]);
    session.submit_selection().unwrap();

    assert!(session.won());
    assert_eq!(
        session.guessed(),
        [
            "Fruits".to_string(),
            "Countries".to_string(),
            "Colors".to_string(),
            "Animals".to_string(),
        ]
    );
}

#[test]
fn locked_words_stay_out_of_later_selections() {
    let mut rng = seeded(1);
    let mut session = GameSession::new(scenario_catalog(), &mut rng).unwrap();

    toggle_all(&mut session, &["Apple", "Banana", "Cherry", "Orange"]);
    session.submit_selection().unwrap();

    // Guessing {Apple, India, Red, Lion}: Apple is locked, so its toggle
    // is a silent no-op and the submission is rejected for size with no
    // state change.
    toggle_all(&mut session, &["Apple", "India", "Red", "Lion"]);
    assert_eq!(session.selected().len(), 3);
    let err = session.submit_selection().unwrap_err();
    assert_eq!(err.selected, 3);
    assert_eq!(session.remaining_count(), 3);
}

#[test]
fn snapshot_drives_a_renderer_loop() {
    let mut rng = seeded(2);
    let mut session = GameSession::new(scenario_catalog(), &mut rng).unwrap();

    // Simulate an adapter that re-renders from scratch after every action.
    session.toggle_word(&word("Red"));
    let snapshot = session.snapshot();
    assert_eq!(snapshot.selected, [word("Red")]);
    assert!(!snapshot.can_submit());

    toggle_all(&mut session, &["Blue", "Green", "Yellow"]);
    let snapshot = session.snapshot();
    assert!(snapshot.can_submit());

    session.submit_selection().unwrap();
    let snapshot = session.snapshot();
    assert_eq!(snapshot.guessed_categories, ["Colors".to_string()]);
    assert_eq!(
        snapshot.message.as_deref(),
        Some("Correct! You've found the Colors category!")
    );
    assert!(snapshot.selected.is_empty());
}

#[test]
fn reset_produces_a_playable_session_again() {
    let catalog = scenario_catalog();
    let mut rng = seeded(3);
    let mut session = GameSession::new(Arc::clone(&catalog), &mut rng).unwrap();

    for group in [
        ["Apple", "Banana", "Cherry", "Orange"],
        ["India", "Brazil", "France", "Japan"],
        ["Red", "Blue", "Green", "Yellow"],
        ["Lion", "Tiger", "Elephant", "Zebra"],
    ] {
        toggle_all(&mut session, &group);
        session.submit_selection().unwrap();
    }
    assert!(session.won());

    session.reset(&mut rng);
    assert!(!session.won());
    assert_eq!(session.remaining_count(), 4);
    assert!(session.snapshot().message.is_none());

    // The fresh board is fully playable.
    toggle_all(&mut session, &["Lion", "Tiger", "Elephant", "Zebra"]);
    session.submit_selection().unwrap();
    assert_eq!(
        session.last_outcome(),
        Some(&GuessOutcome::Solved {
            category: "Animals".to_string()
        })
    );
}
