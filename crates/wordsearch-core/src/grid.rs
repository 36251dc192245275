use serde::{Deserialize, Serialize};

/// A cell coordinate in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major cell index for a grid of the given size.
    pub fn index(&self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Inverse of [`Position::index`].
    pub fn from_index(index: usize, size: usize) -> Self {
        Self {
            row: index / size,
            col: index % size,
        }
    }
}

/// One of the eight directions a word can run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Right,
    Down,
    DownRight,
    UpRight,
    Left,
    Up,
    UpLeft,
    DownLeft,
}

impl Direction {
    /// All eight directions, in a fixed order.
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::Down,
        Direction::DownRight,
        Direction::UpRight,
        Direction::Left,
        Direction::Up,
        Direction::UpLeft,
        Direction::DownLeft,
    ];

    /// Unit step as (row delta, col delta).
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::UpRight => (-1, 1),
            Direction::Left => (0, -1),
            Direction::Up => (-1, 0),
            Direction::UpLeft => (-1, -1),
            Direction::DownLeft => (1, -1),
        }
    }

    /// Step `count` cells from `start`, or `None` if that leaves the grid.
    pub fn offset(self, start: Position, count: usize, size: usize) -> Option<Position> {
        let (dr, dc) = self.delta();
        let row = start.row as i64 + dr as i64 * count as i64;
        let col = start.col as i64 + dc as i64 * count as i64;

        if row < 0 || col < 0 || row >= size as i64 || col >= size as i64 {
            None
        } else {
            Some(Position::new(row as usize, col as usize))
        }
    }
}

/// Sentinel for a cell no word has been written into yet.
const EMPTY: char = ' ';

/// A square grid of uppercase letters.
///
/// The grid starts empty, gets word letters written into it during
/// generation, has its remaining cells filled with random letters, and is
/// immutable for the rest of the round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<char>,
}

impl Grid {
    /// Create an all-empty grid of the given size.
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![EMPTY; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// The letter at a cell, or the space sentinel while still empty.
    pub fn get(&self, pos: Position) -> char {
        self.cells[pos.index(self.size)]
    }

    pub fn is_empty_cell(&self, pos: Position) -> bool {
        self.get(pos) == EMPTY
    }

    pub(crate) fn set(&mut self, pos: Position, letter: char) {
        let index = pos.index(self.size);
        self.cells[index] = letter;
    }

    /// Iterate all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let size = self.size;
        (0..size * size).map(move |i| Position::from_index(i, size))
    }
}

/// Where a placed word's letters sit in the grid.
///
/// Created once per successfully placed word; the covered span is
/// guaranteed in-bounds by the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub word: String,
    pub start: Position,
    pub direction: Direction,
}

impl Placement {
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// The cell holding the letter at `offset` within the word.
    pub fn cell_at(&self, offset: usize) -> Position {
        let (dr, dc) = self.direction.delta();
        Position::new(
            (self.start.row as i64 + dr as i64 * offset as i64) as usize,
            (self.start.col as i64 + dc as i64 * offset as i64) as usize,
        )
    }

    /// All covered cells, in word order.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.len()).map(move |i| self.cell_at(i))
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cells().any(|cell| cell == pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip() {
        let size = 10;
        for row in 0..size {
            for col in 0..size {
                let pos = Position::new(row, col);
                assert_eq!(Position::from_index(pos.index(size), size), pos);
            }
        }
    }

    #[test]
    fn offset_stays_in_bounds() {
        let start = Position::new(0, 0);
        assert_eq!(
            Direction::DownRight.offset(start, 4, 10),
            Some(Position::new(4, 4))
        );
        assert_eq!(Direction::Up.offset(start, 1, 10), None);
        assert_eq!(Direction::Left.offset(start, 1, 10), None);
        assert_eq!(Direction::Right.offset(start, 9, 10), Some(Position::new(0, 9)));
        assert_eq!(Direction::Right.offset(start, 10, 10), None);
    }

    #[test]
    fn placement_cells_follow_direction() {
        let placement = Placement {
            word: "CAT".to_string(),
            start: Position::new(5, 5),
            direction: Direction::UpRight,
        };

        let cells: Vec<Position> = placement.cells().collect();
        assert_eq!(
            cells,
            vec![
                Position::new(5, 5),
                Position::new(4, 6),
                Position::new(3, 7),
            ]
        );
        assert!(placement.contains(Position::new(4, 6)));
        assert!(!placement.contains(Position::new(5, 6)));
    }

    #[test]
    fn grid_set_and_get() {
        let mut grid = Grid::empty(10);
        let pos = Position::new(3, 7);
        assert!(grid.is_empty_cell(pos));

        grid.set(pos, 'Q');
        assert_eq!(grid.get(pos), 'Q');
        assert!(!grid.is_empty_cell(pos));
    }

    #[test]
    fn placement_serializes() {
        let placement = Placement {
            word: "DOG".to_string(),
            start: Position::new(0, 2),
            direction: Direction::Down,
        };

        let json = serde_json::to_string(&placement).unwrap();
        let back: Placement = serde_json::from_str(&json).unwrap();
        assert_eq!(back, placement);
    }
}
