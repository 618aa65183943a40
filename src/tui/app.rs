//! Application state and input handling.

use super::input::{digit_cell, move_cursor};
use crate::config::NoughtsConfig;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use noughts_core::{Coord, GameEngine, MarkResult, SIZE};
use ratatui::layout::{Position, Rect};
use tracing::{debug, info, instrument, warn};

/// Longest name accepted in a name field.
pub const MAX_NAME_LEN: usize = 24;

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Name entry.
    Home,
    /// The grid.
    Board,
}

/// Which name field has focus on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    /// Name for X.
    X,
    /// Name for O.
    O,
}

impl NameField {
    fn toggle(self) -> Self {
        match self {
            NameField::X => NameField::O,
            NameField::O => NameField::X,
        }
    }
}

/// Main application state.
///
/// Holds the only [`GameEngine`]; every mark goes through
/// [`GameEngine::attempt_mark`].
pub struct App {
    engine: GameEngine,
    config: NoughtsConfig,
    screen: Screen,
    x_input: String,
    o_input: String,
    focus: NameField,
    cursor: Coord,
    notice: Option<String>,
    cell_areas: [Rect; SIZE * SIZE],
    should_quit: bool,
}

impl App {
    /// Creates the app on the home screen with optional prefilled names.
    #[instrument(skip(config))]
    pub fn new(config: NoughtsConfig, x_name: Option<String>, o_name: Option<String>) -> Self {
        Self {
            engine: GameEngine::new(),
            config,
            screen: Screen::Home,
            x_input: x_name.unwrap_or_default(),
            o_input: o_name.unwrap_or_default(),
            focus: NameField::X,
            cursor: center(),
            notice: None,
            cell_areas: [Rect::default(); SIZE * SIZE],
            should_quit: false,
        }
    }

    /// The engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// The configuration in use.
    pub fn config(&self) -> &NoughtsConfig {
        &self.config
    }

    /// Current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Text typed into a name field.
    pub fn name_input(&self, field: NameField) -> &str {
        match field {
            NameField::X => &self.x_input,
            NameField::O => &self.o_input,
        }
    }

    /// Focused name field.
    pub fn focus(&self) -> NameField {
        self.focus
    }

    /// Board cursor.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Message about the last refused mark, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Screen area of a cell as last drawn.
    pub fn cell_area(&self, coord: Coord) -> Rect {
        self.cell_areas[coord.index()]
    }

    pub(crate) fn set_cell_area(&mut self, coord: Coord, area: Rect) {
        self.cell_areas[coord.index()] = area;
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one terminal event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(screen = ?self.screen))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.screen {
            Screen::Home => self.handle_home_key(key.code),
            Screen::Board => self.handle_board_key(key.code),
        }
    }

    fn handle_home_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.start(),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = self.focus.toggle();
            }
            KeyCode::Backspace => {
                self.focused_input().pop();
            }
            KeyCode::Char(c) => {
                let input = self.focused_input();
                if input.chars().count() < MAX_NAME_LEN {
                    input.push(c);
                }
            }
            _ => {}
        }
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Char('b') => self.back(),
            KeyCode::Char('r') => self.reset(),
            KeyCode::Enter | KeyCode::Char(' ') => self.mark(self.cursor),
            KeyCode::Char(c) => {
                if let Some(coord) = digit_cell(c) {
                    self.cursor = coord;
                    self.mark(coord);
                }
            }
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    /// Handles a mouse event; a left click on a cell marks it.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.screen != Screen::Board
            || mouse.kind != MouseEventKind::Down(MouseButton::Left)
        {
            return;
        }
        let clicked = Position::new(mouse.column, mouse.row);
        let hit = Coord::ALL
            .into_iter()
            .find(|coord| self.cell_area(*coord).contains(clicked));
        if let Some(coord) = hit {
            self.cursor = coord;
            self.mark(coord);
        }
    }

    /// Starts a round with the typed names, blank ones replaced by defaults.
    #[instrument(skip(self))]
    pub fn start(&mut self) {
        let name_x = self.config.name_for_x(&self.x_input);
        let name_o = self.config.name_for_o(&self.o_input);
        info!(%name_x, %name_o, "Starting round from home screen");
        self.engine.start_round(name_x, name_o);
        self.screen = Screen::Board;
        self.cursor = center();
        self.notice = None;
    }

    /// Starts a new round with the same players.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.engine.restart();
        self.cursor = center();
        self.notice = None;
    }

    /// Returns to the home screen. Typed names are kept.
    #[instrument(skip(self))]
    pub fn back(&mut self) {
        debug!("Back to home screen");
        self.screen = Screen::Home;
        self.notice = None;
    }

    fn mark(&mut self, coord: Coord) {
        let result = self.engine.attempt_mark(coord.row(), coord.col());
        match result {
            MarkResult::Rejected(reason) => {
                warn!(%coord, %reason, "Mark refused");
                self.notice = Some(format!("rejected: {}", reason));
            }
            result => {
                debug!(%coord, ?result, "Mark placed");
                self.notice = None;
            }
        }
    }

    fn focused_input(&mut self) -> &mut String {
        match self.focus {
            NameField::X => &mut self.x_input,
            NameField::O => &mut self.o_input,
        }
    }
}

fn center() -> Coord {
    Coord::ALL[(SIZE * SIZE) / 2]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use noughts_core::Mark;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_starts_on_home_with_prefill() {
        let app = App::new(NoughtsConfig::default(), Some("Ann".into()), None);
        assert_eq!(app.screen(), Screen::Home);
        assert_eq!(app.name_input(NameField::X), "Ann");
        assert_eq!(app.name_input(NameField::O), "");
    }

    #[test]
    fn test_typing_and_switching_fields() {
        let mut app = App::new(NoughtsConfig::default(), None, None);
        type_text(&mut app, "Anx");
        press(&mut app, KeyCode::Backspace);
        type_text(&mut app, "n");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Bo");

        assert_eq!(app.name_input(NameField::X), "Ann");
        assert_eq!(app.name_input(NameField::O), "Bo");
        assert_eq!(app.focus(), NameField::O);
    }

    #[test]
    fn test_name_length_capped() {
        let mut app = App::new(NoughtsConfig::default(), None, None);
        type_text(&mut app, &"a".repeat(MAX_NAME_LEN + 5));
        assert_eq!(app.name_input(NameField::X).len(), MAX_NAME_LEN);
    }

    #[test]
    fn test_cursor_then_enter_marks() {
        let mut app = App::new(NoughtsConfig::default(), None, None);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Enter);

        let top_left = Coord::new(0, 0).unwrap();
        assert_eq!(app.cursor(), top_left);
        assert_eq!(
            app.engine().board().get(top_left),
            noughts_core::Cell::Marked(Mark::X)
        );
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = App::new(NoughtsConfig::default(), None, None);
        let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        app.handle_event(Event::Key(key));
        assert_eq!(app.name_input(NameField::X), "");
    }

    #[test]
    fn test_home_escape_quits() {
        let mut app = App::new(NoughtsConfig::default(), None, None);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit());
    }
}
