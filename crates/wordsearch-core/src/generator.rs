use crate::grid::{Direction, Grid, Placement, Position};
use rand::Rng;

/// Configuration for grid generation.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Smallest grid the generator will produce.
    pub min_size: usize,
    /// Extra cells beyond the longest word's length.
    pub padding: usize,
    /// Random (direction, start) draws per word before it is skipped.
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_size: 10,
            padding: 2,
            max_attempts: 100,
        }
    }
}

/// A generated puzzle: the filled grid, where each placed word sits, and
/// which words could not be placed.
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub grid: Grid,
    pub placements: Vec<Placement>,
    /// Words that exhausted their placement attempts. Lossy but non-fatal;
    /// callers report these and leave them out of play.
    pub skipped: Vec<String>,
}

impl Puzzle {
    pub fn placement_for(&self, word: &str) -> Option<&Placement> {
        self.placements.iter().find(|p| p.word == word)
    }
}

/// Lays words into a square letter grid.
///
/// Each word gets a bounded number of random (direction, start) draws; the
/// first draw whose span stays in bounds and collides with no disagreeing
/// letter is written into the grid. Overlaps where letters agree are
/// allowed, so crossing words happen by chance rather than by design.
pub struct Generator {
    config: GeneratorConfig,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
        }
    }

    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Grid side length for a word list: `max(min_size, longest + padding)`.
    pub fn grid_size(&self, words: &[String]) -> usize {
        let longest = words.iter().map(|w| w.chars().count()).max().unwrap_or(0);
        self.config.min_size.max(longest + self.config.padding)
    }

    /// Generate a puzzle from distinct words, each at least two letters.
    pub fn generate<R: Rng + ?Sized>(&self, words: &[String], rng: &mut R) -> Puzzle {
        let size = self.grid_size(words);
        let mut grid = Grid::empty(size);
        let mut placements = Vec::new();
        let mut skipped = Vec::new();

        for word in words {
            match self.try_place(&mut grid, word, rng) {
                Some(placement) => placements.push(placement),
                None => skipped.push(word.clone()),
            }
        }

        // Fill whatever the words did not cover with random letters.
        for index in 0..size * size {
            let pos = Position::from_index(index, size);
            if grid.is_empty_cell(pos) {
                grid.set(pos, rng.gen_range(b'A'..=b'Z') as char);
            }
        }

        Puzzle {
            grid,
            placements,
            skipped,
        }
    }

    fn try_place<R: Rng + ?Sized>(
        &self,
        grid: &mut Grid,
        word: &str,
        rng: &mut R,
    ) -> Option<Placement> {
        let size = grid.size();

        // Words shorter than two letters are never playable; skip rather
        // than let the span arithmetic underflow.
        if word.chars().count() < 2 {
            return None;
        }

        for _ in 0..self.config.max_attempts {
            let direction = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
            let start = Position::new(rng.gen_range(0..size), rng.gen_range(0..size));

            if Self::fits(grid, word, start, direction) {
                let placement = Placement {
                    word: word.to_string(),
                    start,
                    direction,
                };
                for (letter, cell) in word.chars().zip(placement.cells()) {
                    grid.set(cell, letter);
                }
                return Some(placement);
            }
        }

        None
    }

    /// A word fits when its whole extent is in bounds and every covered
    /// cell is either empty or already holds the matching letter.
    fn fits(grid: &Grid, word: &str, start: Position, direction: Direction) -> bool {
        let len = word.chars().count();
        if direction.offset(start, len - 1, grid.size()).is_none() {
            return false;
        }

        word.chars().enumerate().all(|(i, letter)| {
            // Unwrap is fine: the end of the span was checked above.
            let cell = direction.offset(start, i, grid.size()).unwrap();
            grid.is_empty_cell(cell) || grid.get(cell) == letter
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn grid_size_floors_at_min() {
        let generator = Generator::new();
        assert_eq!(generator.grid_size(&words(&["CAT", "DOG"])), 10);
        assert_eq!(generator.grid_size(&[]), 10);
    }

    #[test]
    fn grid_size_grows_with_longest_word() {
        let generator = Generator::new();
        assert_eq!(generator.grid_size(&words(&["EXTRAORDINARY"])), 15);
    }

    #[test]
    fn placements_spell_their_words() {
        let mut rng = StdRng::seed_from_u64(7);
        let list = words(&["PUZZLE", "SEARCH", "LETTER", "GRID", "HINT"]);
        let puzzle = Generator::new().generate(&list, &mut rng);

        assert!(puzzle.skipped.is_empty());
        assert_eq!(puzzle.placements.len(), list.len());

        for placement in &puzzle.placements {
            let read: String = placement.cells().map(|cell| puzzle.grid.get(cell)).collect();
            assert_eq!(read, placement.word);
        }
    }

    #[test]
    fn every_cell_is_an_uppercase_letter() {
        let mut rng = StdRng::seed_from_u64(11);
        let puzzle = Generator::new().generate(&words(&["CROSS", "WORDS"]), &mut rng);

        for pos in puzzle.grid.positions() {
            assert!(puzzle.grid.get(pos).is_ascii_uppercase());
        }
    }

    #[test]
    fn overlapping_letters_must_agree() {
        // Dense word list on a small board forces overlaps; every placed
        // word must still read back exactly.
        let mut rng = StdRng::seed_from_u64(3);
        let list = words(&[
            "STONE", "NOTES", "ONSET", "SETON", "TONES", "STENO", "SONNET", "TENONS",
        ]);
        let puzzle = Generator::new().generate(&list, &mut rng);

        for placement in &puzzle.placements {
            let read: String = placement.cells().map(|cell| puzzle.grid.get(cell)).collect();
            assert_eq!(read, placement.word);
        }
        assert_eq!(puzzle.placements.len() + puzzle.skipped.len(), list.len());
    }

    #[test]
    fn exhausted_attempts_skip_the_word() {
        let mut rng = StdRng::seed_from_u64(1);
        let generator = Generator::with_config(GeneratorConfig {
            max_attempts: 0,
            ..GeneratorConfig::default()
        });
        let puzzle = generator.generate(&words(&["CAT", "DOG"]), &mut rng);

        assert!(puzzle.placements.is_empty());
        assert_eq!(puzzle.skipped, vec!["CAT", "DOG"]);
        // The grid is still fully filled and playable.
        for pos in puzzle.grid.positions() {
            assert!(puzzle.grid.get(pos).is_ascii_uppercase());
        }
    }

    #[test]
    fn too_short_words_are_skipped_not_placed() {
        // parse_words filters these upstream, but the generator itself
        // must stay safe when handed them directly.
        let mut rng = StdRng::seed_from_u64(8);
        let puzzle = Generator::new().generate(&words(&["", "A", "CAT"]), &mut rng);

        assert_eq!(puzzle.skipped, vec!["", "A"]);
        assert_eq!(puzzle.placements.len(), 1);
        assert_eq!(puzzle.placements[0].word, "CAT");
    }

    #[test]
    fn placement_lookup_by_word() {
        let mut rng = StdRng::seed_from_u64(5);
        let puzzle = Generator::new().generate(&words(&["CAT", "DOG"]), &mut rng);

        assert_eq!(puzzle.placement_for("CAT").unwrap().word, "CAT");
        assert!(puzzle.placement_for("FISH").is_none());
    }
}
