//! Key handling for the Quartet grid UI.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::GameApp;

/// Apply one key event to the app. Release events are ignored so terminals
/// that report both edges don't double-toggle.
pub fn handle_key(app: &mut GameApp, key: KeyEvent) {
    if matches!(key.kind, KeyEventKind::Release) {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Left | KeyCode::Char('h') => app.move_left(),
        KeyCode::Right | KeyCode::Char('l') => app.move_right(),
        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_at_cursor(),
        KeyCode::Char('s') => app.submit(),
        KeyCode::Char('r') => app.reset(),
        _ => {}
    }
}
