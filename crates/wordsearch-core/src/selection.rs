//! Drag-selection accumulation and word matching.

use crate::grid::{Grid, Position};

/// The ordered set of cell indices a player has dragged over in one
/// gesture. Indices are raw row-major cell indices; re-entering a cell
/// already in the gesture is ignored.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    indices: Vec<usize>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a cell to the gesture, ignoring repeats.
    pub fn push(&mut self, index: usize) {
        if !self.indices.contains(&index) {
            self.indices.push(index);
        }
    }

    pub fn clear(&mut self) {
        self.indices.clear();
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }
}

/// Match a completed selection against the not-yet-found target words.
///
/// The selected letters are read in gesture order and checked both forward
/// and reversed. Selections shorter than two cells, and selections that
/// spell nothing new, match nothing. The caller clears the selection after
/// every check regardless of the result.
pub fn match_selection(
    selection: &Selection,
    grid: &Grid,
    targets: &[String],
    found: &[String],
) -> Option<String> {
    if selection.len() < 2 {
        return None;
    }

    let forward: String = selection
        .indices()
        .iter()
        .map(|&index| grid.get(Position::from_index(index, grid.size())))
        .collect();
    let reversed: String = forward.chars().rev().collect();

    for candidate in [forward, reversed] {
        if targets.contains(&candidate) && !found.contains(&candidate) {
            return Some(candidate);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    /// A 10x10 grid with "CAT" across row 0 and filler 'X' elsewhere.
    fn cat_grid() -> Grid {
        let mut grid = Grid::empty(10);
        for pos in 0..100 {
            grid.set(Position::from_index(pos, 10), 'X');
        }
        grid.set(Position::new(0, 0), 'C');
        grid.set(Position::new(0, 1), 'A');
        grid.set(Position::new(0, 2), 'T');
        grid
    }

    fn select(indices: &[usize]) -> Selection {
        let mut selection = Selection::new();
        for &index in indices {
            selection.push(index);
        }
        selection
    }

    #[test]
    fn forward_match() {
        let grid = cat_grid();
        let targets = vec!["CAT".to_string()];
        let matched = match_selection(&select(&[0, 1, 2]), &grid, &targets, &[]);
        assert_eq!(matched, Some("CAT".to_string()));
    }

    #[test]
    fn reverse_match() {
        let grid = cat_grid();
        let targets = vec!["CAT".to_string()];
        // Dragged right-to-left: T, A, C.
        let matched = match_selection(&select(&[2, 1, 0]), &grid, &targets, &[]);
        assert_eq!(matched, Some("CAT".to_string()));
    }

    #[test]
    fn already_found_words_do_not_rematch() {
        let grid = cat_grid();
        let targets = vec!["CAT".to_string()];
        let found = vec!["CAT".to_string()];
        assert_eq!(match_selection(&select(&[0, 1, 2]), &grid, &targets, &found), None);
    }

    #[test]
    fn short_selections_are_discarded() {
        let grid = cat_grid();
        let targets = vec!["CAT".to_string()];
        assert_eq!(match_selection(&select(&[0]), &grid, &targets, &[]), None);
        assert_eq!(match_selection(&Selection::new(), &grid, &targets, &[]), None);
    }

    #[test]
    fn non_words_match_nothing() {
        let grid = cat_grid();
        let targets = vec!["CAT".to_string()];
        assert_eq!(match_selection(&select(&[5, 6, 7]), &grid, &targets, &[]), None);
    }

    #[test]
    fn re_entered_cells_are_ignored() {
        let mut selection = Selection::new();
        selection.push(3);
        selection.push(4);
        selection.push(3);
        assert_eq!(selection.indices(), &[3, 4]);
    }
}
