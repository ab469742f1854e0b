//! Grid UI for Quartet using ratatui.
//!
//! The session is mutated only through its three commands; every action
//! rebuilds the view from a fresh [`BoardSnapshot`], so rendering is a pure
//! function of the snapshot plus the cursor.

mod input;
mod theme;

pub use input::handle_key;
pub use theme::{Palette, palette};

use rand::rngs::StdRng;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use quartet_engine::{BoardSnapshot, GameSession, WordStatus};

/// Words per grid row; the 16-word board renders as a 4x4 grid.
const GRID_COLUMNS: usize = 4;

/// Interactive state for the grid UI: the session plus a cursor and the
/// quit flag.
pub struct GameApp {
    session: GameSession,
    snapshot: BoardSnapshot,
    cursor: usize,
    rng: StdRng,
    should_quit: bool,
}

impl GameApp {
    #[must_use]
    pub fn new(session: GameSession, rng: StdRng) -> Self {
        let snapshot = session.snapshot();
        Self {
            session,
            snapshot,
            cursor: 0,
            rng,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> &BoardSnapshot {
        &self.snapshot
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    fn refresh(&mut self) {
        self.snapshot = self.session.snapshot();
    }

    pub fn move_left(&mut self) {
        if self.cursor % GRID_COLUMNS > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor % GRID_COLUMNS < GRID_COLUMNS - 1
            && self.cursor + 1 < self.snapshot.tiles.len()
        {
            self.cursor += 1;
        }
    }

    pub fn move_up(&mut self) {
        if self.cursor >= GRID_COLUMNS {
            self.cursor -= GRID_COLUMNS;
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor + GRID_COLUMNS < self.snapshot.tiles.len() {
            self.cursor += GRID_COLUMNS;
        }
    }

    /// Toggle the word under the cursor.
    pub fn toggle_at_cursor(&mut self) {
        if let Some(tile) = self.snapshot.tiles.get(self.cursor) {
            let word = tile.word.clone();
            self.session.toggle_word(&word);
            self.refresh();
        }
    }

    /// Submit the current selection. Ignored below four selections; the
    /// status bar already signals that submission is unavailable.
    pub fn submit(&mut self) {
        if let Err(err) = self.session.submit_selection() {
            tracing::debug!(%err, "submission ignored");
            return;
        }
        self.refresh();
    }

    /// Start over with a fresh draw and shuffle.
    pub fn reset(&mut self) {
        self.session.reset(&mut self.rng);
        self.cursor = 0;
        self.refresh();
    }
}

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &GameApp) {
    let palette = palette();
    let bg = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),  // Title
            Constraint::Min(8),     // Word grid
            Constraint::Length(1),  // Selection summary
            Constraint::Length(1),  // Outcome message
            Constraint::Length(1),  // Solved categories / win banner
            Constraint::Length(1),  // Status bar
        ])
        .split(frame.area());

    draw_title(frame, chunks[0], &palette);
    draw_grid(frame, app, chunks[1], &palette);
    draw_selection(frame, app, chunks[2], &palette);
    draw_message(frame, app, chunks[3], &palette);
    draw_progress(frame, app, chunks[4], &palette);
    draw_status_bar(frame, app, chunks[5], &palette);
}

fn draw_title(frame: &mut Frame, area: Rect, palette: &Palette) {
    let title = Line::from(vec![
        Span::styled(
            "Quartet",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " - group the words into their hidden categories",
            Style::default().fg(palette.text_muted),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

fn draw_grid(frame: &mut Frame, app: &GameApp, area: Rect, palette: &Palette) {
    let tiles = &app.snapshot().tiles;
    if tiles.is_empty() {
        return;
    }
    let rows = tiles.len().div_ceil(GRID_COLUMNS);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(3); rows])
        .split(area);

    for (row, row_area) in row_areas.iter().enumerate() {
        let cell_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
            .split(*row_area);

        for (col, cell_area) in cell_areas.iter().enumerate() {
            let index = row * GRID_COLUMNS + col;
            let Some(tile) = tiles.get(index) else {
                continue;
            };

            let is_cursor = index == app.cursor();
            let border_style = if is_cursor {
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.border)
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(if is_cursor {
                    BorderType::Thick
                } else {
                    BorderType::Rounded
                })
                .border_style(border_style)
                .style(Style::default().bg(palette.bg_panel));

            let inner_width = cell_area.width.saturating_sub(2) as usize;
            let label = fit_word(tile.word.as_str(), inner_width);
            let paragraph = Paragraph::new(Line::from(Span::styled(
                label,
                palette.tile(tile.status),
            )))
            .alignment(Alignment::Center)
            .block(block);
            frame.render_widget(paragraph, *cell_area);
        }
    }
}

fn draw_selection(frame: &mut Frame, app: &GameApp, area: Rect, palette: &Palette) {
    let snapshot = app.snapshot();
    let words: Vec<&str> = snapshot.selected.iter().map(|w| w.as_str()).collect();
    let line = Line::from(vec![
        Span::styled("Selected: ", Style::default().fg(palette.text_muted)),
        Span::styled(
            words.join(", "),
            Style::default().fg(palette.selected),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_message(frame: &mut Frame, app: &GameApp, area: Rect, palette: &Palette) {
    let snapshot = app.snapshot();
    let Some(message) = snapshot.message.as_deref() else {
        return;
    };
    let style = if message.starts_with("Correct") {
        Style::default().fg(palette.correct)
    } else {
        Style::default().fg(palette.error)
    };
    frame.render_widget(Paragraph::new(Line::from(Span::styled(message, style))), area);
}

fn draw_progress(frame: &mut Frame, app: &GameApp, area: Rect, palette: &Palette) {
    let snapshot = app.snapshot();
    let line = if snapshot.won {
        Line::from(Span::styled(
            format!(
                "You won! Categories found: {}",
                snapshot.guessed_categories.join(", ")
            ),
            Style::default()
                .fg(palette.warning)
                .add_modifier(Modifier::BOLD),
        ))
    } else if snapshot.guessed_categories.is_empty() {
        Line::from(Span::styled(
            format!("{} categories to find", snapshot.remaining_categories),
            Style::default().fg(palette.text_muted),
        ))
    } else {
        Line::from(vec![
            Span::styled("Solved: ", Style::default().fg(palette.text_muted)),
            Span::styled(
                snapshot.guessed_categories.join(", "),
                Style::default().fg(palette.correct),
            ),
        ])
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_status_bar(frame: &mut Frame, app: &GameApp, area: Rect, palette: &Palette) {
    let snapshot = app.snapshot();
    let submit_style = if snapshot.can_submit() {
        Style::default().fg(palette.text_primary)
    } else {
        Style::default().fg(palette.text_muted)
    };
    let line = Line::from(vec![
        Span::styled("arrows", Style::default().fg(palette.text_muted)),
        Span::styled(" move  ", Style::default().fg(palette.text_muted)),
        Span::styled("space", Style::default().fg(palette.text_primary)),
        Span::styled(" toggle  ", Style::default().fg(palette.text_muted)),
        Span::styled("s", submit_style),
        Span::styled(" submit  ", Style::default().fg(palette.text_muted)),
        Span::styled("r", Style::default().fg(palette.text_primary)),
        Span::styled(" reset  ", Style::default().fg(palette.text_muted)),
        Span::styled("q", Style::default().fg(palette.text_primary)),
        Span::styled(" quit", Style::default().fg(palette.text_muted)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Truncate a word to the cell width, ellipsizing long ones.
fn fit_word(word: &str, width: usize) -> String {
    if word.width() <= width {
        return word.to_string();
    }
    let mut out = String::new();
    for ch in word.chars() {
        if out.width() + 2 > width {
            break;
        }
        out.push(ch);
    }
    out.push('…');
    out
}
