use crate::config::{Config, MAX_WORD_COUNT, MIN_WORD_COUNT};
use crate::game::Game;
use crate::theme::Theme;
use crate::wordbank::WordSource;
use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use wordsearch_core::{parse_words, Position};

/// Hint flash lifetime: ~3 seconds at the 100ms poll
const HINT_TICKS: u32 = 30;
/// Transient message lifetime: ~3 seconds at the 100ms poll
const MESSAGE_TICKS: u32 = 30;

/// Result of handling an input event
pub enum AppAction {
    Continue,
    Quit,
}

/// Current screen state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    /// Building the word list
    Setup,
    /// A round in progress
    Playing,
    /// All words found
    Complete,
}

/// The main application state
pub struct App {
    /// Current screen state
    pub screen_state: ScreenState,
    /// Color theme
    pub theme: Theme,
    /// Persisted preferences
    pub config: Config,
    /// Word list being assembled on the setup screen
    pub words: Vec<String>,
    /// Manual word entry buffer
    pub input: String,
    /// Highlighted entry in the setup word list
    pub word_selection: usize,
    /// Current round, once the grid has been generated
    pub game: Option<Game>,
    /// Currently selected cell position
    pub cursor: Position,
    /// Transient hint highlight
    pub hint_cell: Option<Position>,
    /// Hint auto-clear countdown
    hint_timer: u32,
    /// Message to display
    pub message: Option<String>,
    /// Message auto-clear countdown
    message_timer: u32,
    /// Guards against re-entering the word source mid-fetch
    fetching: bool,
    /// Random-word provider
    source: Box<dyn WordSource>,
    /// Top-left screen cell of the rendered grid, for mouse hit-testing.
    /// Updated by the renderer every frame.
    pub grid_origin: (u16, u16),
}

impl App {
    pub fn new(config: Config, source: Box<dyn WordSource>) -> Self {
        let theme = Theme::by_name(&config.theme).unwrap_or_default();
        Self {
            screen_state: ScreenState::Setup,
            theme,
            config,
            words: Vec::new(),
            input: String::new(),
            word_selection: 0,
            game: None,
            cursor: Position::new(0, 0),
            hint_cell: None,
            hint_timer: 0,
            message: None,
            message_timer: 0,
            fetching: false,
            source,
            grid_origin: (0, 0),
        }
    }

    /// Show a temporary message
    pub fn show_message(&mut self, msg: &str) {
        self.message = Some(msg.to_string());
        self.message_timer = MESSAGE_TICKS;
    }

    /// Update countdowns (called every tick)
    pub fn tick(&mut self) {
        if self.message_timer > 0 {
            self.message_timer -= 1;
            if self.message_timer == 0 {
                self.message = None;
            }
        }

        if self.hint_timer > 0 {
            self.hint_timer -= 1;
            if self.hint_timer == 0 {
                self.hint_cell = None;
            }
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match self.screen_state {
            ScreenState::Setup => self.handle_setup_key(key),
            ScreenState::Playing => self.handle_game_key(key),
            ScreenState::Complete => self.handle_complete_key(key),
        }
    }

    fn handle_setup_key(&mut self, key: KeyEvent) -> AppAction {
        // Control chords first, so Ctrl+R is never typed as a letter.
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('r') => self.fetch_random_words(),
                KeyCode::Char('u') => {
                    self.words.clear();
                    self.word_selection = 0;
                    self.show_message("Cleared word list");
                }
                KeyCode::Char('t') => self.cycle_theme(),
                KeyCode::Char('c') => return AppAction::Quit,
                _ => {}
            }
            return AppAction::Continue;
        }

        match key.code {
            KeyCode::Esc => return AppAction::Quit,

            KeyCode::Enter => {
                if self.input.is_empty() {
                    self.start_round();
                } else {
                    self.add_words_from_input();
                }
            }

            // Manual entry: letters plus the comma/space separators.
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                self.input.push(c.to_ascii_uppercase());
            }
            KeyCode::Char(c @ (',' | ' ')) => self.input.push(c),
            KeyCode::Backspace => {
                self.input.pop();
            }

            // Word list management
            KeyCode::Up => {
                self.word_selection = self.word_selection.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.word_selection + 1 < self.words.len() {
                    self.word_selection += 1;
                }
            }
            KeyCode::Delete => self.remove_selected_word(),

            // Random-word count
            KeyCode::Char('+' | '=') => self.adjust_word_count(1),
            KeyCode::Char('-') => self.adjust_word_count(-1),

            _ => {}
        }

        AppAction::Continue
    }

    fn handle_game_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') => return AppAction::Quit,

            // Navigation
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1, 0),
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(0, -1),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(0, 1),

            // Keyboard drag: press to anchor, move to extend, press to check.
            KeyCode::Char(' ') | KeyCode::Enter => {
                let cursor = self.cursor;
                if let Some(game) = self.game.as_mut() {
                    if game.is_selecting() {
                        self.release_selection();
                    } else {
                        game.begin_selection(cursor);
                    }
                }
            }

            KeyCode::Esc => {
                if let Some(game) = self.game.as_mut() {
                    if game.is_selecting() {
                        game.cancel_selection();
                    }
                }
            }

            // Hint
            KeyCode::Char('?') => self.request_hint(),

            // Pause
            KeyCode::Char('p') => {
                if let Some(game) = self.game.as_mut() {
                    game.toggle_pause();
                    if game.is_paused() {
                        self.show_message("Paused");
                    } else {
                        self.show_message("Resumed");
                    }
                }
            }

            // Regenerate the grid with the same words
            KeyCode::Char('r') => self.start_round(),

            // Back to the word list for a new round
            KeyCode::Char('n') => self.reset_to_setup(),

            // Theme cycle
            KeyCode::Char('t') => self.cycle_theme(),

            _ => {}
        }

        AppAction::Continue
    }

    fn handle_complete_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('r') => self.start_round(),
            KeyCode::Char('n') => self.reset_to_setup(),
            KeyCode::Char('t') => self.cycle_theme(),
            _ => {}
        }
        AppAction::Continue
    }

    /// Handle a mouse event: left drag over the grid is a selection gesture.
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if self.screen_state != ScreenState::Playing {
            return;
        }

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(pos) = self.cell_at_screen(event.column, event.row) {
                    self.cursor = pos;
                    if let Some(game) = self.game.as_mut() {
                        game.begin_selection(pos);
                    }
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(pos) = self.cell_at_screen(event.column, event.row) {
                    self.cursor = pos;
                    if let Some(game) = self.game.as_mut() {
                        game.extend_selection(pos);
                    }
                }
            }
            MouseEventKind::Up(MouseButton::Left) => self.release_selection(),
            _ => {}
        }
    }

    /// Map a screen coordinate to a grid cell. Cells render two columns
    /// wide from the origin the renderer recorded.
    fn cell_at_screen(&self, x: u16, y: u16) -> Option<Position> {
        let game = self.game.as_ref()?;
        let size = game.grid().size() as u16;
        let (gx, gy) = self.grid_origin;

        if y < gy || y >= gy + size || x < gx || x >= gx + size * 2 {
            return None;
        }
        Some(Position::new((y - gy) as usize, ((x - gx) / 2) as usize))
    }

    fn move_cursor(&mut self, row_delta: i32, col_delta: i32) {
        let Some(game) = self.game.as_mut() else {
            return;
        };
        let max = (game.grid().size() - 1) as i32;
        let row = (self.cursor.row as i32 + row_delta).clamp(0, max) as usize;
        let col = (self.cursor.col as i32 + col_delta).clamp(0, max) as usize;
        self.cursor = Position::new(row, col);

        if game.is_selecting() {
            game.extend_selection(self.cursor);
        }
    }

    /// End the current gesture and check it, announcing the result.
    fn release_selection(&mut self) {
        let Some(game) = self.game.as_mut() else {
            return;
        };

        if let Some(word) = game.finish_selection() {
            let msg = format!("Found {word}!");
            self.show_message(&msg);
        }

        if self.game.as_ref().is_some_and(Game::is_completed) {
            self.screen_state = ScreenState::Complete;
        }
    }

    fn request_hint(&mut self) {
        let Some(game) = self.game.as_mut() else {
            return;
        };

        match game.hint(&mut rand::thread_rng()) {
            Some(cell) => {
                self.hint_cell = Some(cell);
                self.hint_timer = HINT_TICKS;
            }
            None => self.show_message("No hint available"),
        }
    }

    /// Parse the entry buffer into words, silently filtering invalid and
    /// duplicate entries.
    fn add_words_from_input(&mut self) {
        let added = parse_words(&self.input, &self.words);
        self.input.clear();

        if added.is_empty() {
            self.show_message("No new words");
            return;
        }
        let msg = format!(
            "Added {} {}",
            added.len(),
            if added.len() == 1 { "word" } else { "words" }
        );
        self.words.extend(added);
        self.show_message(&msg);
    }

    fn remove_selected_word(&mut self) {
        if self.word_selection < self.words.len() {
            let word = self.words.remove(self.word_selection);
            if self.word_selection >= self.words.len() && self.word_selection > 0 {
                self.word_selection -= 1;
            }
            let msg = format!("Removed {word}");
            self.show_message(&msg);
        }
    }

    fn adjust_word_count(&mut self, delta: i32) {
        let count = (self.config.word_count as i32 + delta)
            .clamp(MIN_WORD_COUNT as i32, MAX_WORD_COUNT as i32) as usize;
        self.config.word_count = count;
    }

    /// Ask the word source for a batch, keeping the existing list intact on
    /// failure. One call in flight at a time.
    fn fetch_random_words(&mut self) {
        if self.fetching {
            return;
        }
        self.fetching = true;

        let result = self
            .source
            .random_words(self.config.word_count, &mut rand::thread_rng());
        self.fetching = false;

        match result {
            Ok(batch) => {
                let before = self.words.len();
                for word in batch {
                    if !self.words.contains(&word) {
                        self.words.push(word);
                    }
                }
                let added = self.words.len() - before;
                let msg = format!(
                    "Added {added} random {}",
                    if added == 1 { "word" } else { "words" }
                );
                self.show_message(&msg);
            }
            Err(err) => {
                let msg = format!("Word fetch failed: {err}");
                self.show_message(&msg);
            }
        }
    }

    /// Generate a grid for the current word list and start (or restart) a
    /// round.
    fn start_round(&mut self) {
        if self.words.is_empty() {
            self.show_message("Add some words first");
            return;
        }

        let game = Game::new(&self.words, &mut rand::thread_rng());

        if game.words().is_empty() {
            let msg = format!(
                "None of the words fit the grid: {}",
                game.skipped().join(", ")
            );
            self.show_message(&msg);
            return;
        }
        if !game.skipped().is_empty() {
            let msg = format!("Could not place: {}", game.skipped().join(", "));
            self.show_message(&msg);
        }

        let center = game.grid().size() / 2;
        self.cursor = Position::new(center, center);
        self.hint_cell = None;
        self.hint_timer = 0;
        self.game = Some(game);
        self.screen_state = ScreenState::Playing;
    }

    /// Abandon the round and go back to word entry, keeping the list.
    fn reset_to_setup(&mut self) {
        self.game = None;
        self.hint_cell = None;
        self.hint_timer = 0;
        self.screen_state = ScreenState::Setup;
    }

    fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.config.theme = self.theme.name.to_string();
        let msg = format!("{} theme", self.theme.name);
        self.show_message(&msg);
    }
}
