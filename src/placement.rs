//! Word placement primitives: directions, placed-word spans, and the
//! feasibility check that runs before a word is committed to the grid.
//!
//! Only three directions exist. Words read left-to-right, top-to-bottom, or
//! down-right; reverse and anti-diagonal placements are not supported.

use std::fmt;

use rand::Rng;

use crate::grid::Grid;

/// The direction a hidden word runs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
    /// Down and to the right.
    Diagonal,
}

/// All supported placement directions.
pub const DIRECTIONS: [Direction; 3] = [
    Direction::Horizontal,
    Direction::Vertical,
    Direction::Diagonal,
];

impl Direction {
    /// The per-letter `(row, col)` step for this direction.
    #[inline]
    pub fn step(self) -> (usize, usize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
        }
    }

    /// Picks a direction uniformly at random.
    pub fn random(rng: &mut impl Rng) -> Self {
        DIRECTIONS[rng.gen_range(0..DIRECTIONS.len())]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Horizontal => f.write_str("horizontal"),
            Direction::Vertical => f.write_str("vertical"),
            Direction::Diagonal => f.write_str("diagonal"),
        }
    }
}

/// A word successfully embedded in the grid, with enough metadata to read it
/// back out of the letters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedWord {
    /// The embedded word, uppercase.
    pub word: String,
    /// Row of the word's first letter.
    pub row: usize,
    /// Column of the word's first letter.
    pub col: usize,
    /// The direction the word runs in.
    pub direction: Direction,
}

impl PlacedWord {
    /// The coordinates of the word's last letter.
    pub fn end(&self) -> (usize, usize) {
        let (drow, dcol) = self.direction.step();
        let last = self.word.chars().count().saturating_sub(1);
        (self.row + last * drow, self.col + last * dcol)
    }

    /// Walks the grid coordinates covered by this word, first letter first.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (drow, dcol) = self.direction.step();
        (0..self.word.chars().count()).map(move |i| (self.row + i * drow, self.col + i * dcol))
    }
}

/// Checks whether `word` fits at the given start cell and direction.
///
/// The word must end inside the grid, and every covered cell must be either
/// unwritten or already holding the letter the word needs there, which is
/// what allows words to cross. Read-only; the grid is not touched.
pub fn can_place(grid: &Grid, word: &str, row: usize, col: usize, direction: Direction) -> bool {
    let len = word.chars().count();
    if len == 0 {
        return false;
    }

    let (drow, dcol) = direction.step();
    let end_row = row + (len - 1) * drow;
    let end_col = col + (len - 1) * dcol;
    if end_row >= grid.size() || end_col >= grid.size() {
        return false;
    }

    word.chars().enumerate().all(|(i, letter)| {
        let cell = grid.cell(row + i * drow, col + i * dcol);
        cell.letter.is_none() || cell.letter == Some(letter)
    })
}

/// Writes `word` into the grid along `direction`, stamping each covered cell
/// with `word_index`.
///
/// Feasibility must have been confirmed with [`can_place`] first; no
/// re-validation happens here. A cell shared with an earlier word keeps its
/// letter (identical by construction) but remembers this word's index.
pub fn place(
    grid: &mut Grid,
    word: &str,
    row: usize,
    col: usize,
    direction: Direction,
    word_index: usize,
) {
    let (drow, dcol) = direction.step();

    for (i, letter) in word.chars().enumerate() {
        let cell = grid.cell_mut(row + i * drow, col + i * dcol);
        cell.letter = Some(letter);
        cell.word_index = Some(word_index);
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_direction_steps() {
        assert_eq!(Direction::Horizontal.step(), (0, 1));
        assert_eq!(Direction::Vertical.step(), (1, 0));
        assert_eq!(Direction::Diagonal.step(), (1, 1));
    }

    #[test]
    fn test_random_direction_comes_from_the_table() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            let direction = Direction::random(&mut rng);
            assert!(DIRECTIONS.contains(&direction));
        }
    }

    #[test]
    fn test_placed_word_cells_walk_the_direction() {
        let placed = PlacedWord {
            word: String::from("TEA"),
            row: 0,
            col: 2,
            direction: Direction::Diagonal,
        };

        let cells: Vec<_> = placed.cells().collect();
        assert_eq!(cells, [(0, 2), (1, 3), (2, 4)]);
        assert_eq!(placed.end(), (2, 4));
    }

    #[test]
    fn test_can_place_rejects_words_running_off_the_grid() {
        let grid = Grid::new(5);

        assert!(can_place(&grid, "HELLO", 0, 0, Direction::Horizontal));
        assert!(!can_place(&grid, "HELLO", 0, 1, Direction::Horizontal));
        assert!(!can_place(&grid, "HELLO", 1, 0, Direction::Vertical));
        assert!(!can_place(&grid, "HELLO", 1, 1, Direction::Diagonal));
        assert!(can_place(&grid, "HELLO", 0, 0, Direction::Diagonal));
    }

    #[test]
    fn test_can_place_rejects_empty_words() {
        let grid = Grid::new(5);
        assert!(!can_place(&grid, "", 0, 0, Direction::Horizontal));
    }

    #[test]
    fn test_can_place_rejects_conflicting_letters() {
        let mut grid = Grid::new(5);
        place(&mut grid, "CAT", 0, 0, Direction::Horizontal, 0);

        // "DOG" would need a 'D' where "CAT" already put a 'C'
        assert!(!can_place(&grid, "DOG", 0, 0, Direction::Vertical));
    }

    #[test]
    fn test_can_place_allows_crossing_on_a_shared_letter() {
        let mut grid = Grid::new(5);
        place(&mut grid, "CAT", 0, 0, Direction::Horizontal, 0);

        // "CUP" starts on the 'C' that "CAT" wrote
        assert!(can_place(&grid, "CUP", 0, 0, Direction::Vertical));
    }

    #[test]
    fn test_place_writes_letters_and_word_indices() {
        let mut grid = Grid::new(5);
        place(&mut grid, "CAT", 1, 0, Direction::Horizontal, 3);

        assert_eq!(grid.letter(1, 0), Some('C'));
        assert_eq!(grid.letter(1, 1), Some('A'));
        assert_eq!(grid.letter(1, 2), Some('T'));
        for col in 0..3 {
            assert_eq!(grid.cell(1, col).word_index, Some(3));
            assert!(grid.cell(1, col).is_part_of_word());
        }
        assert!(!grid.cell(1, 3).is_part_of_word());
    }

    #[test]
    fn test_shared_cell_remembers_the_last_writer() {
        let mut grid = Grid::new(5);
        place(&mut grid, "CAT", 0, 0, Direction::Horizontal, 0);
        place(&mut grid, "CUP", 0, 0, Direction::Vertical, 1);

        let shared = grid.cell(0, 0);
        assert_eq!(shared.letter, Some('C'));
        assert_eq!(shared.word_index, Some(1), "last writer wins on shared cells");
    }
}
