use rand::Rng;
use std::time::{Duration, Instant};
use wordsearch_core::{match_selection, pick_hint, Generator, Grid, Position, Puzzle, Selection};

/// The drag-gesture state machine: `Idle -> Selecting` on press,
/// `Selecting -> Idle` on release with a synchronous check-and-clear step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectState {
    Idle,
    Selecting,
}

/// One round of play, from grid generation to all-found or reset.
///
/// Owns the whole session state: targets, grid, found words, the live
/// selection, and the timer. A reset constructs a fresh `Game` wholesale.
pub struct Game {
    /// Playable targets: the placed words only.
    words: Vec<String>,
    puzzle: Puzzle,
    found: Vec<String>,
    selection: Selection,
    select_state: SelectState,
    /// Start time of the current running stretch
    start_time: Instant,
    /// Elapsed time accumulated across pauses
    elapsed: Duration,
    paused: bool,
    completed: bool,
    hints_used: usize,
}

impl Game {
    /// Generate a grid for the given words and start the round's timer.
    pub fn new<R: Rng + ?Sized>(words: &[String], rng: &mut R) -> Self {
        let puzzle = Generator::new().generate(words, rng);

        // Skipped words are not findable, so they are not targets either.
        let words: Vec<String> = words
            .iter()
            .filter(|w| puzzle.placement_for(w).is_some())
            .cloned()
            .collect();

        Self {
            words,
            puzzle,
            found: Vec::new(),
            selection: Selection::new(),
            select_state: SelectState::Idle,
            start_time: Instant::now(),
            elapsed: Duration::ZERO,
            paused: false,
            completed: false,
            hints_used: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.puzzle.grid
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn found(&self) -> &[String] {
        &self.found
    }

    pub fn skipped(&self) -> &[String] {
        &self.puzzle.skipped
    }

    pub fn is_found(&self, word: &str) -> bool {
        self.found.iter().any(|w| w == word)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_selecting(&self) -> bool {
        self.select_state == SelectState::Selecting
    }

    pub fn hints_used(&self) -> usize {
        self.hints_used
    }

    /// Index of the first found word whose placement covers `pos`, for
    /// per-word coloring. The index is into `words()`.
    pub fn found_word_covering(&self, pos: Position) -> Option<usize> {
        self.words.iter().position(|word| {
            self.is_found(word)
                && self
                    .puzzle
                    .placement_for(word)
                    .is_some_and(|p| p.contains(pos))
        })
    }

    /// Elapsed play time, frozen while paused and after completion.
    pub fn elapsed(&self) -> Duration {
        if self.paused || self.completed {
            self.elapsed
        } else {
            self.elapsed + self.start_time.elapsed()
        }
    }

    /// Format the elapsed time as MM:SS.
    pub fn elapsed_string(&self) -> String {
        let secs = self.elapsed().as_secs();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn toggle_pause(&mut self) {
        if self.completed {
            return;
        }

        if self.paused {
            self.start_time = Instant::now();
        } else {
            self.elapsed += self.start_time.elapsed();
            self.cancel_selection();
        }
        self.paused = !self.paused;
    }

    /// Begin a drag gesture at a cell.
    pub fn begin_selection(&mut self, pos: Position) {
        if self.completed || self.paused {
            return;
        }
        self.selection.clear();
        self.selection.push(pos.index(self.grid().size()));
        self.select_state = SelectState::Selecting;
    }

    /// Extend the gesture over a cell. No-op outside an active gesture.
    pub fn extend_selection(&mut self, pos: Position) {
        if self.select_state != SelectState::Selecting {
            return;
        }
        self.selection.push(pos.index(self.grid().size()));
    }

    /// Release the gesture: check the selection against the unfound
    /// targets, record a match, and clear. Returns the word found, if any.
    pub fn finish_selection(&mut self) -> Option<String> {
        if self.select_state != SelectState::Selecting {
            return None;
        }
        self.select_state = SelectState::Idle;

        let matched = match_selection(&self.selection, self.grid(), &self.words, &self.found);
        self.selection.clear();

        if let Some(word) = &matched {
            self.found.push(word.clone());
            if !self.words.is_empty() && self.found.len() == self.words.len() {
                self.completed = true;
                self.elapsed += self.start_time.elapsed();
            }
        }

        matched
    }

    pub fn cancel_selection(&mut self) {
        self.selection.clear();
        self.select_state = SelectState::Idle;
    }

    /// Pick a hint cell on a random unfound word.
    pub fn hint<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Position> {
        if self.completed || self.paused {
            return None;
        }

        let cell = pick_hint(&self.words, &self.found, &self.puzzle.placements, rng);
        if cell.is_some() {
            self.hints_used += 1;
        }
        cell
    }
}
