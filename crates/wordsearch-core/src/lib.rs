//! Core logic for a word-search puzzle game.
//!
//! The engine is a small pure-function pipeline: [`parse_words`] cleans a
//! raw word list, [`Generator`] lays the words into a square letter grid,
//! [`match_selection`] maps a drag gesture over cells back to a word, and
//! [`pick_hint`] reveals a cell of a not-yet-found word. All randomness is
//! driven by a caller-supplied [`rand::Rng`] so generation is reproducible
//! under a seeded RNG.

pub mod generator;
pub mod grid;
pub mod hint;
pub mod selection;
pub mod words;

pub use generator::{Generator, GeneratorConfig, Puzzle};
pub use grid::{Direction, Grid, Placement, Position};
pub use hint::pick_hint;
pub use selection::{match_selection, Selection};
pub use words::parse_words;
